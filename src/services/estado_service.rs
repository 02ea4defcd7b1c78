//! Regla de consistencia estado-asignaciones
//!
//! El estado del vehículo debe reflejar siempre su conjunto de asignaciones
//! activas: cualquier asignación activa fuerza EN_USO; al quedar sin
//! asignaciones activas el vehículo vuelve a DISPONIBLE. La regla se aplica
//! dentro de la misma transacción que la escritura que la dispara.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::vehiculo::EstadoVehiculo;
use crate::utils::errors::AppError;

/// Decide el nuevo estado del vehículo tras escribir una asignación.
///
/// `activa` es el flag de la asignación escrita; `otras_activas` cuenta las
/// asignaciones activas del mismo vehículo excluyendo la escrita. Devuelve
/// `None` cuando no hay que tocar el estado.
pub fn resolver_estado(
    activa: bool,
    otras_activas: i64,
    actual: EstadoVehiculo,
) -> Option<EstadoVehiculo> {
    if activa {
        (actual != EstadoVehiculo::EnUso).then_some(EstadoVehiculo::EnUso)
    } else if otras_activas == 0 {
        (actual != EstadoVehiculo::Disponible).then_some(EstadoVehiculo::Disponible)
    } else {
        // Quedan otras asignaciones activas: el vehículo sigue como está
        None
    }
}

/// Aplica la regla sobre la base de datos, dentro de la transacción dada.
///
/// `asignacion_id` es la asignación recién escrita; se excluye del recuento
/// de activas para que el resultado no dependa del orden de escritura.
pub async fn sincronizar_estado_vehiculo(
    tx: &mut Transaction<'_, Postgres>,
    vehiculo_id: Uuid,
    asignacion_id: Uuid,
    activa: bool,
) -> Result<(), AppError> {
    let actual: EstadoVehiculo =
        sqlx::query_scalar("SELECT estado FROM vehiculos WHERE id = $1 FOR UPDATE")
            .bind(vehiculo_id)
            .fetch_one(&mut **tx)
            .await?;

    let otras_activas: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM asignaciones WHERE vehiculo_id = $1 AND activa = TRUE AND id <> $2",
    )
    .bind(vehiculo_id)
    .bind(asignacion_id)
    .fetch_one(&mut **tx)
    .await?;

    if let Some(nuevo) = resolver_estado(activa, otras_activas, actual) {
        sqlx::query("UPDATE vehiculos SET estado = $1 WHERE id = $2")
            .bind(nuevo)
            .bind(vehiculo_id)
            .execute(&mut **tx)
            .await?;

        tracing::info!(
            "🚗 Vehículo {} pasa de {} a {}",
            vehiculo_id,
            actual.as_str(),
            nuevo.as_str()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehiculo::EstadoVehiculo::*;

    #[test]
    fn test_crear_asignacion_sobre_disponible_pasa_a_en_uso() {
        assert_eq!(resolver_estado(true, 0, Disponible), Some(EnUso));
    }

    #[test]
    fn test_asignacion_activa_sobre_en_uso_no_toca_nada() {
        assert_eq!(resolver_estado(true, 0, EnUso), None);
        assert_eq!(resolver_estado(true, 3, EnUso), None);
    }

    #[test]
    fn test_finalizar_la_unica_activa_vuelve_a_disponible() {
        assert_eq!(resolver_estado(false, 0, EnUso), Some(Disponible));
    }

    #[test]
    fn test_finalizar_una_de_varias_activas_mantiene_en_uso() {
        // Caso límite: dos asignaciones activas sobre el mismo vehículo;
        // finalizar una no debe marcarlo disponible
        assert_eq!(resolver_estado(false, 1, EnUso), None);
        assert_eq!(resolver_estado(false, 5, EnUso), None);
    }

    #[test]
    fn test_sin_activas_nunca_queda_en_uso() {
        for actual in [Disponible, EnUso, Mantenimiento, Baja] {
            let resultado = resolver_estado(false, 0, actual).unwrap_or(actual);
            assert_ne!(resultado, EnUso);
        }
    }

    #[test]
    fn test_inactiva_sobre_disponible_es_noop() {
        assert_eq!(resolver_estado(false, 0, Disponible), None);
    }
}
