//! Modelo de Mantenimiento
//!
//! Registro de mantenimientos y reparaciones de vehículos.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de trabajo - mapea al ENUM tipo_mantenimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tipo_mantenimiento", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoMantenimiento {
    Revision,
    Reparacion,
    Itv,
    Neumaticos,
    Otros,
}

/// Mantenimiento - mapea exactamente a la tabla mantenimientos
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mantenimiento {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    pub tipo: TipoMantenimiento,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: Option<NaiveDate>,
    pub descripcion: String,
    pub coste: Decimal,
    pub taller: String,
    pub completado: bool,
}

/// Mantenimiento con la matrícula del vehículo asociado (para listados)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MantenimientoConVehiculo {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    pub matricula: String,
    pub tipo: TipoMantenimiento,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: Option<NaiveDate>,
    pub descripcion: String,
    pub coste: Decimal,
    pub taller: String,
    pub completado: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tipo_serializa_en_mayusculas() {
        let json = serde_json::to_string(&TipoMantenimiento::Itv).unwrap();
        assert_eq!(json, "\"ITV\"");

        let parsed: TipoMantenimiento = serde_json::from_str("\"NEUMATICOS\"").unwrap();
        assert_eq!(parsed, TipoMantenimiento::Neumaticos);
    }
}
