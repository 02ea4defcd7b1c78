//! DTOs de la limpieza de asignaciones antiguas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Query params de la previsualización (GET)
#[derive(Debug, Deserialize)]
pub struct LimpiezaQuery {
    pub semanas: Option<i64>,
}

// Body de la ejecución (POST); solo confirmar=si elimina
#[derive(Debug, Deserialize)]
pub struct EjecutarLimpiezaRequest {
    pub semanas: Option<i64>,
    pub confirmar: Option<String>,
}

impl EjecutarLimpiezaRequest {
    pub fn confirmado(&self) -> bool {
        self.confirmar.as_deref() == Some("si")
    }
}

// Fila de la muestra de previsualización
#[derive(Debug, Serialize)]
pub struct AsignacionAntiguaResponse {
    pub id: Uuid,
    pub matricula: String,
    pub cliente: String,
    pub fecha_fin: DateTime<Utc>,
}

// Response de previsualización
#[derive(Debug, Serialize)]
pub struct LimpiezaPreviewResponse {
    pub semanas: i64,
    pub fecha_limite: DateTime<Utc>,
    pub total: i64,
    pub muestra: Vec<AsignacionAntiguaResponse>,
}

// Response tras ejecutar la eliminación
#[derive(Debug, Serialize)]
pub struct LimpiezaResultadoResponse {
    pub semanas: i64,
    pub fecha_limite: DateTime<Utc>,
    pub eliminadas: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_confirmar_si_confirma() {
        let request = EjecutarLimpiezaRequest {
            semanas: Some(3),
            confirmar: Some("si".to_string()),
        };
        assert!(request.confirmado());

        let sin_confirmar = EjecutarLimpiezaRequest {
            semanas: Some(3),
            confirmar: None,
        };
        assert!(!sin_confirmar.confirmado());

        let confirmacion_rara = EjecutarLimpiezaRequest {
            semanas: Some(3),
            confirmar: Some("yes".to_string()),
        };
        assert!(!confirmacion_rara.confirmado());
    }
}
