//! Modelo de Vehiculo
//!
//! Este módulo contiene el struct Vehiculo y el enum de estados.
//! Mapea exactamente al schema PostgreSQL (tabla vehiculos, ENUM estado_vehiculo).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados posibles de un vehículo de sustitución - mapea al ENUM estado_vehiculo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "estado_vehiculo", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoVehiculo {
    Disponible,
    EnUso,
    Mantenimiento,
    Baja,
}

impl EstadoVehiculo {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoVehiculo::Disponible => "DISPONIBLE",
            EstadoVehiculo::EnUso => "EN_USO",
            EstadoVehiculo::Mantenimiento => "MANTENIMIENTO",
            EstadoVehiculo::Baja => "BAJA",
        }
    }
}

/// Vehículo de sustitución - mapea exactamente a la tabla vehiculos
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehiculo {
    pub id: Uuid,
    pub matricula: String,
    pub marca: String,
    pub modelo: String,
    pub color: String,
    pub anio: i32,
    pub estado: EstadoVehiculo,
    pub kilometraje: i32,
    pub fecha_alta: NaiveDate,
    pub fecha_ultima_revision: Option<NaiveDate>,
    pub observaciones: String,
    pub created_at: DateTime<Utc>,
}

impl Vehiculo {
    /// Verifica si el vehículo está disponible para asignación
    pub fn esta_disponible(&self) -> bool {
        self.estado == EstadoVehiculo::Disponible
    }

    /// Días transcurridos desde la última revisión, si la hay
    pub fn dias_sin_revision(&self, hoy: NaiveDate) -> Option<i64> {
        self.fecha_ultima_revision
            .map(|fecha| (hoy - fecha).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehiculo_de_prueba(estado: EstadoVehiculo) -> Vehiculo {
        Vehiculo {
            id: Uuid::new_v4(),
            matricula: "0987TRE".to_string(),
            marca: "Seat".to_string(),
            modelo: "Ibiza".to_string(),
            color: "Rojo".to_string(),
            anio: 2020,
            estado,
            kilometraje: 45000,
            fecha_alta: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            fecha_ultima_revision: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            observaciones: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_esta_disponible() {
        assert!(vehiculo_de_prueba(EstadoVehiculo::Disponible).esta_disponible());
        assert!(!vehiculo_de_prueba(EstadoVehiculo::EnUso).esta_disponible());
        assert!(!vehiculo_de_prueba(EstadoVehiculo::Baja).esta_disponible());
    }

    #[test]
    fn test_estado_serializa_en_mayusculas() {
        let json = serde_json::to_string(&EstadoVehiculo::EnUso).unwrap();
        assert_eq!(json, "\"EN_USO\"");

        let parsed: EstadoVehiculo = serde_json::from_str("\"MANTENIMIENTO\"").unwrap();
        assert_eq!(parsed, EstadoVehiculo::Mantenimiento);
    }

    #[test]
    fn test_dias_sin_revision() {
        let vehiculo = vehiculo_de_prueba(EstadoVehiculo::Disponible);
        let hoy = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        assert_eq!(vehiculo.dias_sin_revision(hoy), Some(10));

        let mut sin_revision = vehiculo;
        sin_revision.fecha_ultima_revision = None;
        assert_eq!(sin_revision.dias_sin_revision(hoy), None);
    }
}
