//! Limpieza de asignaciones finalizadas antiguas
//!
//! Servicio compartido entre el comando de terminal y la ruta de
//! administración: previsualiza y elimina asignaciones inactivas cuya
//! fecha de fin supera el umbral de retención.

use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Máximo de filas mostradas en la previsualización
pub const MUESTRA_MAX: i64 = 10;

/// Fecha límite de retención: todo lo finalizado antes se puede eliminar
pub fn fecha_limite_desde(ahora: DateTime<Utc>, semanas: i64) -> DateTime<Utc> {
    ahora - Duration::weeks(semanas)
}

/// Fila de la previsualización, con la matrícula del vehículo
#[derive(Debug, Clone, FromRow)]
pub struct AsignacionAntigua {
    pub id: Uuid,
    pub matricula: String,
    pub cliente: String,
    pub fecha_fin: DateTime<Utc>,
}

/// Resultado de una previsualización
#[derive(Debug)]
pub struct ResumenLimpieza {
    pub semanas: i64,
    pub fecha_limite: DateTime<Utc>,
    pub total: i64,
    pub muestra: Vec<AsignacionAntigua>,
}

pub struct LimpiezaService {
    pool: PgPool,
}

impl LimpiezaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cuenta y muestrea las asignaciones que se eliminarían. No borra nada.
    pub async fn previsualizar(&self, semanas: i64) -> Result<ResumenLimpieza, AppError> {
        let fecha_limite = fecha_limite_desde(Utc::now(), semanas);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM asignaciones \
             WHERE activa = FALSE AND fecha_fin IS NOT NULL AND fecha_fin < $1",
        )
        .bind(fecha_limite)
        .fetch_one(&self.pool)
        .await?;

        let muestra = sqlx::query_as::<_, AsignacionAntigua>(
            "SELECT a.id, v.matricula, a.cliente, a.fecha_fin \
             FROM asignaciones a \
             JOIN vehiculos v ON v.id = a.vehiculo_id \
             WHERE a.activa = FALSE AND a.fecha_fin IS NOT NULL AND a.fecha_fin < $1 \
             ORDER BY a.fecha_fin ASC \
             LIMIT $2",
        )
        .bind(fecha_limite)
        .bind(MUESTRA_MAX)
        .fetch_all(&self.pool)
        .await?;

        Ok(ResumenLimpieza {
            semanas,
            fecha_limite,
            total,
            muestra,
        })
    }

    /// Elimina las asignaciones antiguas y devuelve (fecha límite, eliminadas)
    pub async fn ejecutar(&self, semanas: i64) -> Result<(DateTime<Utc>, i64), AppError> {
        let fecha_limite = fecha_limite_desde(Utc::now(), semanas);

        let resultado = sqlx::query(
            "DELETE FROM asignaciones \
             WHERE activa = FALSE AND fecha_fin IS NOT NULL AND fecha_fin < $1",
        )
        .bind(fecha_limite)
        .execute(&self.pool)
        .await?;

        let eliminadas = resultado.rows_affected() as i64;
        tracing::info!(
            "🧹 Limpieza de asignaciones: {} eliminadas (anteriores a {})",
            eliminadas,
            fecha_limite
        );

        Ok((fecha_limite, eliminadas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fecha_limite_tres_semanas() {
        let ahora = Utc.with_ymd_and_hms(2025, 8, 22, 12, 0, 0).unwrap();
        let limite = fecha_limite_desde(ahora, 3);
        assert_eq!(limite, Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_fecha_limite_cero_semanas_es_ahora() {
        let ahora = Utc.with_ymd_and_hms(2025, 8, 22, 12, 0, 0).unwrap();
        assert_eq!(fecha_limite_desde(ahora, 0), ahora);
    }

    #[test]
    fn test_asignacion_reciente_queda_fuera_del_umbral() {
        // Una asignación finalizada hace dos semanas no entra en el corte de tres
        let ahora = Utc.with_ymd_and_hms(2025, 8, 22, 12, 0, 0).unwrap();
        let fin_reciente = ahora - Duration::weeks(2);
        let limite = fecha_limite_desde(ahora, 3);
        assert!(fin_reciente >= limite);

        let fin_antiguo = ahora - Duration::weeks(4);
        assert!(fin_antiguo < limite);
    }
}
