use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::vehiculo_dto::{
    CreateVehiculoRequest, DetalleVehiculoResponse, FiltroVehiculos, UpdateVehiculoRequest,
    VehiculoResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehiculo))
        .route("/", get(list_vehiculos))
        .route("/:id", get(detalle_vehiculo))
        .route("/:id", put(update_vehiculo))
        .route("/:id", delete(delete_vehiculo))
}

async fn create_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateVehiculoRequest>,
) -> Result<Json<ApiResponse<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehiculos(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroVehiculos>,
) -> Result<Json<Vec<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.list(filtro.estado).await?;
    Ok(Json(response))
}

async fn detalle_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DetalleVehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.detalle(id).await?;
    Ok(Json(response))
}

async fn update_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehiculoRequest>,
) -> Result<Json<ApiResponse<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
