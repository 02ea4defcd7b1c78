//! Controlador de asignaciones

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::asignacion_dto::{
    AsignacionResponse, CreateAsignacionRequest, FiltroActividad, FinalizarAsignacionRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::asignacion_repository::AsignacionRepository;
use crate::utils::errors::AppError;

pub struct AsignacionController {
    repository: AsignacionRepository,
}

impl AsignacionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AsignacionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAsignacionRequest,
    ) -> Result<ApiResponse<AsignacionResponse>, AppError> {
        request.validate()?;

        let asignacion = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            asignacion.into(),
            "Asignación creada exitosamente".to_string(),
        ))
    }

    pub async fn list(
        &self,
        filtro: FiltroActividad,
    ) -> Result<Vec<AsignacionResponse>, AppError> {
        let asignaciones = self.repository.list(filtro).await?;

        Ok(asignaciones.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AsignacionResponse, AppError> {
        let asignacion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asignación no encontrada".to_string()))?;

        Ok(asignacion.into())
    }

    pub async fn finalizar(
        &self,
        id: Uuid,
        request: FinalizarAsignacionRequest,
    ) -> Result<ApiResponse<AsignacionResponse>, AppError> {
        request.validate()?;

        let asignacion = self.repository.finalizar(id, request).await?;

        Ok(ApiResponse::success_with_message(
            asignacion.into(),
            "Asignación finalizada exitosamente".to_string(),
        ))
    }
}
