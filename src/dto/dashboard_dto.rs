//! DTOs del dashboard

use serde::Serialize;

use crate::dto::asignacion_dto::AsignacionResponse;
use crate::dto::vehiculo_dto::VehiculoResponse;

// Response del dashboard: contadores + flota + asignaciones activas recientes
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_vehiculos: i64,
    pub disponibles: i64,
    pub en_uso: i64,
    pub vehiculos: Vec<VehiculoResponse>,
    pub asignaciones_activas: Vec<AsignacionResponse>,
}
