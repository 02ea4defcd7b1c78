//! Controlador del dashboard

use sqlx::PgPool;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::models::vehiculo::EstadoVehiculo;
use crate::repositories::asignacion_repository::AsignacionRepository;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::AppError;

/// Asignaciones activas que se muestran en el dashboard
const ASIGNACIONES_RECIENTES: i64 = 5;

pub struct DashboardController {
    vehiculos: VehiculoRepository,
    asignaciones: AsignacionRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehiculos: VehiculoRepository::new(pool.clone()),
            asignaciones: AsignacionRepository::new(pool),
        }
    }

    pub async fn resumen(&self) -> Result<DashboardResponse, AppError> {
        let total_vehiculos = self.vehiculos.contar_total().await?;
        let disponibles = self
            .vehiculos
            .contar_por_estado(EstadoVehiculo::Disponible)
            .await?;
        let en_uso = self
            .vehiculos
            .contar_por_estado(EstadoVehiculo::EnUso)
            .await?;

        let vehiculos = self.vehiculos.list(None).await?;
        let asignaciones_activas = self
            .asignaciones
            .activas_recientes(ASIGNACIONES_RECIENTES)
            .await?;

        Ok(DashboardResponse {
            total_vehiculos,
            disponibles,
            en_uso,
            vehiculos: vehiculos.into_iter().map(Into::into).collect(),
            asignaciones_activas: asignaciones_activas.into_iter().map(Into::into).collect(),
        })
    }
}
