//! Routers de la API
//!
//! La composición completa vive en `create_app_router` para que el
//! binario del servidor y los tests de integración monten exactamente
//! la misma aplicación.

pub mod admin_routes;
pub mod asignacion_routes;
pub mod auth_routes;
pub mod dashboard_routes;
pub mod mantenimiento_routes;
pub mod vehiculo_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/vehiculos", vehiculo_routes::create_vehiculo_router())
        .nest(
            "/api/asignaciones",
            asignacion_routes::create_asignacion_router(),
        )
        .nest(
            "/api/mantenimientos",
            mantenimiento_routes::create_mantenimiento_router(),
        )
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/admin", admin_routes::create_admin_router(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "gescoches",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
