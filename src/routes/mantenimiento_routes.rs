use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::mantenimiento_controller::MantenimientoController;
use crate::dto::mantenimiento_dto::{
    CreateMantenimientoRequest, FiltroMantenimientos, FinalizarMantenimientoRequest,
    MantenimientoResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mantenimiento_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_mantenimiento))
        .route("/", get(list_mantenimientos))
        .route("/:id/finalizar", post(finalizar_mantenimiento))
}

async fn create_mantenimiento(
    State(state): State<AppState>,
    Json(request): Json<CreateMantenimientoRequest>,
) -> Result<Json<ApiResponse<MantenimientoResponse>>, AppError> {
    let controller = MantenimientoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_mantenimientos(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroMantenimientos>,
) -> Result<Json<Vec<MantenimientoResponse>>, AppError> {
    let controller = MantenimientoController::new(state.pool.clone());
    let response = controller.list(filtro.completado()).await?;
    Ok(Json(response))
}

async fn finalizar_mantenimiento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinalizarMantenimientoRequest>,
) -> Result<Json<ApiResponse<MantenimientoResponse>>, AppError> {
    let controller = MantenimientoController::new(state.pool.clone());
    let response = controller.finalizar(id, request).await?;
    Ok(Json(response))
}
