//! Middleware de autorización de administración
//!
//! Protege las rutas de /admin: exige un Bearer token válido y con el
//! claim de administrador. Sin token o con token inválido responde 401;
//! con token válido pero sin permisos, 403.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn requerir_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("Falta el header Authorization".to_string())
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Formato de autorización inválido".to_string()))?;

    let claims = JwtService::new(&state.config).validar_token(token)?;

    if !claims.admin {
        return Err(AppError::Forbidden(
            "Se requieren permisos de administrador".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
