//! Modelo de Asignacion
//!
//! Registro de asignaciones de vehículos a clientes. Una asignación
//! activa no tiene fecha_fin ni kilometraje_entrada.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Asignación - mapea exactamente a la tabla asignaciones
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Asignacion {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    pub cliente: String,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub kilometraje_salida: i32,
    pub kilometraje_entrada: Option<i32>,
    pub motivo: String,
    pub observaciones: String,
    pub activa: bool,
}

impl Asignacion {
    /// Kilómetros recorridos durante la asignación, si ya fue finalizada
    pub fn km_recorridos(&self) -> Option<i32> {
        self.kilometraje_entrada
            .map(|entrada| entrada - self.kilometraje_salida)
    }
}

/// Asignación con la matrícula del vehículo asociado (para listados)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AsignacionConVehiculo {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    pub matricula: String,
    pub cliente: String,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub kilometraje_salida: i32,
    pub kilometraje_entrada: Option<i32>,
    pub motivo: String,
    pub observaciones: String,
    pub activa: bool,
}

impl AsignacionConVehiculo {
    pub fn km_recorridos(&self) -> Option<i32> {
        self.kilometraje_entrada
            .map(|entrada| entrada - self.kilometraje_salida)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asignacion_de_prueba(entrada: Option<i32>) -> Asignacion {
        Asignacion {
            id: Uuid::new_v4(),
            vehiculo_id: Uuid::new_v4(),
            cliente: "Taller Pérez".to_string(),
            fecha_inicio: Utc::now(),
            fecha_fin: None,
            kilometraje_salida: 45000,
            kilometraje_entrada: entrada,
            motivo: "Reparación del vehículo del cliente".to_string(),
            observaciones: String::new(),
            activa: entrada.is_none(),
        }
    }

    #[test]
    fn test_km_recorridos_con_entrada() {
        let asignacion = asignacion_de_prueba(Some(45350));
        assert_eq!(asignacion.km_recorridos(), Some(350));
    }

    #[test]
    fn test_km_recorridos_sin_entrada() {
        let asignacion = asignacion_de_prueba(None);
        assert_eq!(asignacion.km_recorridos(), None);
    }
}
