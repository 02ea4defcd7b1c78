//! DTOs de mantenimientos

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::mantenimiento::{Mantenimiento, MantenimientoConVehiculo, TipoMantenimiento};

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMantenimientoRequest {
    pub vehiculo_id: Uuid,

    pub tipo: TipoMantenimiento,

    #[validate(length(min = 1))]
    pub descripcion: String,

    pub coste: Option<Decimal>,

    #[validate(length(max = 100))]
    pub taller: Option<String>,

    pub fecha_entrada: Option<NaiveDate>,
}

// Request para marcar un mantenimiento como completado
#[derive(Debug, Deserialize)]
pub struct FinalizarMantenimientoRequest {
    pub fecha_salida: Option<NaiveDate>,
}

// Response de mantenimiento; matricula solo está presente en listados con join
#[derive(Debug, Serialize)]
pub struct MantenimientoResponse {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
    pub tipo: TipoMantenimiento,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: Option<NaiveDate>,
    pub descripcion: String,
    pub coste: Decimal,
    pub taller: String,
    pub completado: bool,
}

impl From<Mantenimiento> for MantenimientoResponse {
    fn from(m: Mantenimiento) -> Self {
        Self {
            id: m.id,
            vehiculo_id: m.vehiculo_id,
            matricula: None,
            tipo: m.tipo,
            fecha_entrada: m.fecha_entrada,
            fecha_salida: m.fecha_salida,
            descripcion: m.descripcion,
            coste: m.coste,
            taller: m.taller,
            completado: m.completado,
        }
    }
}

impl From<MantenimientoConVehiculo> for MantenimientoResponse {
    fn from(m: MantenimientoConVehiculo) -> Self {
        Self {
            id: m.id,
            vehiculo_id: m.vehiculo_id,
            matricula: Some(m.matricula),
            tipo: m.tipo,
            fecha_entrada: m.fecha_entrada,
            fecha_salida: m.fecha_salida,
            descripcion: m.descripcion,
            coste: m.coste,
            taller: m.taller,
            completado: m.completado,
        }
    }
}

/// Filtro del listado de mantenimientos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltroCompletado {
    Pendientes,
    Completados,
    Todos,
}

// Query params del listado de mantenimientos
#[derive(Debug, Deserialize)]
pub struct FiltroMantenimientos {
    pub filtro: Option<String>,
}

impl FiltroMantenimientos {
    /// Sin parámetro (o con un valor desconocido) se listan todos
    pub fn completado(&self) -> FiltroCompletado {
        match self.filtro.as_deref() {
            Some("pendientes") => FiltroCompletado::Pendientes,
            Some("completados") => FiltroCompletado::Completados,
            _ => FiltroCompletado::Todos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtro_pendientes() {
        let filtro = FiltroMantenimientos {
            filtro: Some("pendientes".to_string()),
        };
        assert_eq!(filtro.completado(), FiltroCompletado::Pendientes);
    }

    #[test]
    fn test_filtro_completados() {
        let filtro = FiltroMantenimientos {
            filtro: Some("completados".to_string()),
        };
        assert_eq!(filtro.completado(), FiltroCompletado::Completados);
    }

    #[test]
    fn test_filtro_por_defecto_todos() {
        let filtro = FiltroMantenimientos { filtro: None };
        assert_eq!(filtro.completado(), FiltroCompletado::Todos);
    }
}
