//! Rutas de administración, protegidas por el middleware de admin

use axum::{
    extract::{Query, State},
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::limpieza_controller::LimpiezaController;
use crate::dto::limpieza_dto::{
    EjecutarLimpiezaRequest, LimpiezaPreviewResponse, LimpiezaQuery, LimpiezaResultadoResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::admin_auth::requerir_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/limpiar-asignaciones", get(previsualizar_limpieza))
        .route("/limpiar-asignaciones", post(ejecutar_limpieza))
        .route_layer(middleware::from_fn_with_state(state, requerir_admin))
}

async fn previsualizar_limpieza(
    State(state): State<AppState>,
    Query(query): Query<LimpiezaQuery>,
) -> Result<Json<LimpiezaPreviewResponse>, AppError> {
    let controller = LimpiezaController::new(state.pool.clone(), state.config.semanas_retencion);
    let response = controller.previsualizar(query.semanas).await?;
    Ok(Json(response))
}

async fn ejecutar_limpieza(
    State(state): State<AppState>,
    Json(request): Json<EjecutarLimpiezaRequest>,
) -> Result<Json<ApiResponse<LimpiezaResultadoResponse>>, AppError> {
    let controller = LimpiezaController::new(state.pool.clone(), state.config.semanas_retencion);
    let response = controller.ejecutar(request).await?;
    Ok(Json(response))
}
