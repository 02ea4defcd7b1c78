//! DTOs de asignaciones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::asignacion::{Asignacion, AsignacionConVehiculo};

// Request para crear una asignación (nace activa)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAsignacionRequest {
    pub vehiculo_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub cliente: String,

    #[validate(length(min = 1))]
    pub motivo: String,

    #[validate(range(min = 0))]
    pub kilometraje_salida: i32,

    pub fecha_inicio: Option<DateTime<Utc>>,

    pub observaciones: Option<String>,
}

// Request para finalizar una asignación activa
#[derive(Debug, Deserialize, Validate)]
pub struct FinalizarAsignacionRequest {
    #[validate(range(min = 0))]
    pub kilometraje_entrada: i32,

    pub fecha_fin: Option<DateTime<Utc>>,
}

// Response de asignación; matricula solo está presente en listados con join
#[derive(Debug, Serialize)]
pub struct AsignacionResponse {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
    pub cliente: String,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub kilometraje_salida: i32,
    pub kilometraje_entrada: Option<i32>,
    pub km_recorridos: Option<i32>,
    pub motivo: String,
    pub observaciones: String,
    pub activa: bool,
}

impl From<Asignacion> for AsignacionResponse {
    fn from(a: Asignacion) -> Self {
        let km_recorridos = a.km_recorridos();
        Self {
            id: a.id,
            vehiculo_id: a.vehiculo_id,
            matricula: None,
            cliente: a.cliente,
            fecha_inicio: a.fecha_inicio,
            fecha_fin: a.fecha_fin,
            kilometraje_salida: a.kilometraje_salida,
            kilometraje_entrada: a.kilometraje_entrada,
            km_recorridos,
            motivo: a.motivo,
            observaciones: a.observaciones,
            activa: a.activa,
        }
    }
}

impl From<AsignacionConVehiculo> for AsignacionResponse {
    fn from(a: AsignacionConVehiculo) -> Self {
        let km_recorridos = a.km_recorridos();
        Self {
            id: a.id,
            vehiculo_id: a.vehiculo_id,
            matricula: Some(a.matricula),
            cliente: a.cliente,
            fecha_inicio: a.fecha_inicio,
            fecha_fin: a.fecha_fin,
            kilometraje_salida: a.kilometraje_salida,
            kilometraje_entrada: a.kilometraje_entrada,
            km_recorridos,
            motivo: a.motivo,
            observaciones: a.observaciones,
            activa: a.activa,
        }
    }
}

/// Filtro del listado de asignaciones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltroActividad {
    Activas,
    Finalizadas,
    Todas,
}

// Query params del listado de asignaciones
#[derive(Debug, Deserialize)]
pub struct FiltroAsignaciones {
    pub filtro: Option<String>,
}

impl FiltroAsignaciones {
    /// Sin parámetro se listan las activas; un valor desconocido lista todas
    pub fn actividad(&self) -> FiltroActividad {
        match self.filtro.as_deref() {
            None | Some("activas") => FiltroActividad::Activas,
            Some("finalizadas") => FiltroActividad::Finalizadas,
            Some(_) => FiltroActividad::Todas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtro_por_defecto_son_activas() {
        let filtro = FiltroAsignaciones { filtro: None };
        assert_eq!(filtro.actividad(), FiltroActividad::Activas);
    }

    #[test]
    fn test_filtro_activas() {
        let filtro = FiltroAsignaciones {
            filtro: Some("activas".to_string()),
        };
        assert_eq!(filtro.actividad(), FiltroActividad::Activas);
    }

    #[test]
    fn test_filtro_finalizadas() {
        let filtro = FiltroAsignaciones {
            filtro: Some("finalizadas".to_string()),
        };
        assert_eq!(filtro.actividad(), FiltroActividad::Finalizadas);
    }

    #[test]
    fn test_filtro_desconocido_lista_todas() {
        let filtro = FiltroAsignaciones {
            filtro: Some("cualquier-cosa".to_string()),
        };
        assert_eq!(filtro.actividad(), FiltroActividad::Todas);
    }
}
