use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::asignacion_controller::AsignacionController;
use crate::dto::asignacion_dto::{
    AsignacionResponse, CreateAsignacionRequest, FiltroAsignaciones, FinalizarAsignacionRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_asignacion_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_asignacion))
        .route("/", get(list_asignaciones))
        .route("/:id", get(get_asignacion))
        .route("/:id/finalizar", post(finalizar_asignacion))
}

async fn create_asignacion(
    State(state): State<AppState>,
    Json(request): Json<CreateAsignacionRequest>,
) -> Result<Json<ApiResponse<AsignacionResponse>>, AppError> {
    let controller = AsignacionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_asignaciones(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroAsignaciones>,
) -> Result<Json<Vec<AsignacionResponse>>, AppError> {
    let controller = AsignacionController::new(state.pool.clone());
    let response = controller.list(filtro.actividad()).await?;
    Ok(Json(response))
}

async fn get_asignacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AsignacionResponse>, AppError> {
    let controller = AsignacionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn finalizar_asignacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinalizarAsignacionRequest>,
) -> Result<Json<ApiResponse<AsignacionResponse>>, AppError> {
    let controller = AsignacionController::new(state.pool.clone());
    let response = controller.finalizar(id, request).await?;
    Ok(Json(response))
}
