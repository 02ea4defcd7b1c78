//! Controlador de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehiculo_dto::{
    CreateVehiculoRequest, DetalleVehiculoResponse, UpdateVehiculoRequest, VehiculoResponse,
};
use crate::dto::ApiResponse;
use crate::models::vehiculo::EstadoVehiculo;
use crate::repositories::asignacion_repository::AsignacionRepository;
use crate::repositories::mantenimiento_repository::MantenimientoRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::AppError;

/// Registros de historial que se muestran en la vista de detalle
const HISTORIAL_RECIENTE: i64 = 10;

pub struct VehiculoController {
    repository: VehiculoRepository,
    asignaciones: AsignacionRepository,
    mantenimientos: MantenimientoRepository,
}

impl VehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehiculoRepository::new(pool.clone()),
            asignaciones: AsignacionRepository::new(pool.clone()),
            mantenimientos: MantenimientoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request.validate()?;

        if self
            .repository
            .matricula_exists(&request.matricula, None)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        let vehiculo = self
            .repository
            .create(
                request.matricula,
                request.marca,
                request.modelo,
                request.color,
                request.anio,
                request.kilometraje.unwrap_or(0),
                request.fecha_alta,
                request.observaciones.unwrap_or_default(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehiculo.into(),
            "Vehículo dado de alta exitosamente".to_string(),
        ))
    }

    pub async fn list(
        &self,
        estado: Option<EstadoVehiculo>,
    ) -> Result<Vec<VehiculoResponse>, AppError> {
        let vehiculos = self.repository.list(estado).await?;

        Ok(vehiculos.into_iter().map(VehiculoResponse::from).collect())
    }

    /// Detalle del vehículo con su historial reciente
    pub async fn detalle(&self, id: Uuid) -> Result<DetalleVehiculoResponse, AppError> {
        let vehiculo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let asignaciones = self
            .asignaciones
            .por_vehiculo(id, HISTORIAL_RECIENTE)
            .await?;
        let mantenimientos = self
            .mantenimientos
            .por_vehiculo(id, HISTORIAL_RECIENTE)
            .await?;

        Ok(DetalleVehiculoResponse {
            vehiculo: vehiculo.into(),
            asignaciones: asignaciones.into_iter().map(Into::into).collect(),
            mantenimientos: mantenimientos.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request.validate()?;

        if let Some(matricula) = &request.matricula {
            if self.repository.matricula_exists(matricula, Some(id)).await? {
                return Err(AppError::Conflict(
                    "La matrícula ya está registrada".to_string(),
                ));
            }
        }

        let vehiculo = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            vehiculo.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
