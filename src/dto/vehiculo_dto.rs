//! DTOs de vehículos

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::asignacion_dto::AsignacionResponse;
use crate::dto::mantenimiento_dto::MantenimientoResponse;
use crate::models::vehiculo::{EstadoVehiculo, Vehiculo};

// Request para dar de alta un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehiculoRequest {
    #[validate(regex(
        path = "crate::utils::validation::MATRICULA_REGEX",
        message = "Formato de matrícula inválido. Debe ser 4 números seguidos de 3 letras (ej: 0987TRE)"
    ))]
    pub matricula: String,

    #[validate(length(min = 1, max = 50))]
    pub marca: String,

    #[validate(length(min = 1, max = 50))]
    pub modelo: String,

    #[validate(length(min = 1, max = 30))]
    pub color: String,

    #[validate(range(min = 1900, max = 2100))]
    pub anio: i32,

    #[validate(range(min = 0))]
    pub kilometraje: Option<i32>,

    pub fecha_alta: Option<NaiveDate>,

    pub observaciones: Option<String>,
}

// Request para actualizar un vehículo; todos los campos son opcionales
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehiculoRequest {
    #[validate(regex(
        path = "crate::utils::validation::MATRICULA_REGEX",
        message = "Formato de matrícula inválido. Debe ser 4 números seguidos de 3 letras (ej: 0987TRE)"
    ))]
    pub matricula: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub modelo: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub color: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub anio: Option<i32>,

    /// Permite forzar el estado manualmente (p.ej. MANTENIMIENTO o BAJA)
    pub estado: Option<EstadoVehiculo>,

    #[validate(range(min = 0))]
    pub kilometraje: Option<i32>,

    pub fecha_ultima_revision: Option<NaiveDate>,

    pub observaciones: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
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
    pub dias_sin_revision: Option<i64>,
    pub observaciones: String,
}

impl From<Vehiculo> for VehiculoResponse {
    fn from(v: Vehiculo) -> Self {
        let dias_sin_revision = v.dias_sin_revision(Utc::now().date_naive());
        Self {
            id: v.id,
            matricula: v.matricula,
            marca: v.marca,
            modelo: v.modelo,
            color: v.color,
            anio: v.anio,
            estado: v.estado,
            kilometraje: v.kilometraje,
            fecha_alta: v.fecha_alta,
            fecha_ultima_revision: v.fecha_ultima_revision,
            dias_sin_revision,
            observaciones: v.observaciones,
        }
    }
}

// Detalle de vehículo con su historial reciente
#[derive(Debug, Serialize)]
pub struct DetalleVehiculoResponse {
    pub vehiculo: VehiculoResponse,
    pub asignaciones: Vec<AsignacionResponse>,
    pub mantenimientos: Vec<MantenimientoResponse>,
}

// Query params del listado de vehículos
#[derive(Debug, Deserialize)]
pub struct FiltroVehiculos {
    pub estado: Option<EstadoVehiculo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_valida() -> CreateVehiculoRequest {
        CreateVehiculoRequest {
            matricula: "0987TRE".to_string(),
            marca: "Seat".to_string(),
            modelo: "Ibiza".to_string(),
            color: "Rojo".to_string(),
            anio: 2020,
            kilometraje: Some(45000),
            fecha_alta: None,
            observaciones: None,
        }
    }

    #[test]
    fn test_matricula_correcta_pasa_validacion() {
        assert!(request_valida().validate().is_ok());
    }

    #[test]
    fn test_matricula_invertida_falla_validacion() {
        let mut request = request_valida();
        request.matricula = "TRE0987".to_string();

        let errores = request.validate().unwrap_err();
        assert!(errores.field_errors().contains_key("matricula"));
    }

    #[test]
    fn test_anio_fuera_de_rango_falla_validacion() {
        let mut request = request_valida();
        request.anio = 1850;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_solo_valida_campos_presentes() {
        let request = UpdateVehiculoRequest {
            matricula: None,
            marca: None,
            modelo: None,
            color: None,
            anio: None,
            estado: Some(EstadoVehiculo::Baja),
            kilometraje: Some(50000),
            fecha_ultima_revision: None,
            observaciones: None,
        };
        assert!(request.validate().is_ok());

        let request_mala = UpdateVehiculoRequest {
            matricula: Some("0987tre".to_string()),
            marca: None,
            modelo: None,
            color: None,
            anio: None,
            estado: None,
            kilometraje: None,
            fecha_ultima_revision: None,
            observaciones: None,
        };
        assert!(request_mala.validate().is_err());
    }
}
