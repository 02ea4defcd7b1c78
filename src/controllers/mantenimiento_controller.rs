//! Controlador de mantenimientos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::mantenimiento_dto::{
    CreateMantenimientoRequest, FiltroCompletado, FinalizarMantenimientoRequest,
    MantenimientoResponse,
};
use crate::dto::ApiResponse;
use crate::repositories::mantenimiento_repository::MantenimientoRepository;
use crate::utils::errors::AppError;

pub struct MantenimientoController {
    repository: MantenimientoRepository,
}

impl MantenimientoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MantenimientoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMantenimientoRequest,
    ) -> Result<ApiResponse<MantenimientoResponse>, AppError> {
        request.validate()?;

        let mantenimiento = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            mantenimiento.into(),
            "Mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(
        &self,
        filtro: FiltroCompletado,
    ) -> Result<Vec<MantenimientoResponse>, AppError> {
        let mantenimientos = self.repository.list(filtro).await?;

        Ok(mantenimientos.into_iter().map(Into::into).collect())
    }

    pub async fn finalizar(
        &self,
        id: Uuid,
        request: FinalizarMantenimientoRequest,
    ) -> Result<ApiResponse<MantenimientoResponse>, AppError> {
        let mantenimiento = self
            .repository
            .finalizar(id, request.fecha_salida)
            .await?;

        Ok(ApiResponse::success_with_message(
            mantenimiento.into(),
            "Mantenimiento completado exitosamente".to_string(),
        ))
    }
}
