//! Repositorio de asignaciones
//!
//! Las escrituras que afectan al flag `activa` aplican la regla de
//! consistencia de estados dentro de la misma transacción.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::asignacion_dto::{CreateAsignacionRequest, FiltroActividad, FinalizarAsignacionRequest};
use crate::models::asignacion::{Asignacion, AsignacionConVehiculo};
use crate::services::estado_service;
use crate::utils::errors::{validation_error, AppError};

const SELECT_CON_VEHICULO: &str = "SELECT a.id, a.vehiculo_id, v.matricula, a.cliente, \
     a.fecha_inicio, a.fecha_fin, a.kilometraje_salida, a.kilometraje_entrada, \
     a.motivo, a.observaciones, a.activa \
     FROM asignaciones a \
     JOIN vehiculos v ON v.id = a.vehiculo_id";

pub struct AsignacionRepository {
    pool: PgPool,
}

impl AsignacionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una asignación activa y forzar el vehículo a EN_USO
    pub async fn create(
        &self,
        request: CreateAsignacionRequest,
    ) -> Result<Asignacion, AppError> {
        let mut tx = self.pool.begin().await?;

        let vehiculo_existe: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vehiculos WHERE id = $1)")
                .bind(request.vehiculo_id)
                .fetch_one(&mut *tx)
                .await?;

        if !vehiculo_existe {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        let id = Uuid::new_v4();
        let fecha_inicio = request.fecha_inicio.unwrap_or_else(Utc::now);

        let asignacion = sqlx::query_as::<_, Asignacion>(
            r#"
            INSERT INTO asignaciones (id, vehiculo_id, cliente, fecha_inicio, kilometraje_salida, motivo, observaciones, activa)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.vehiculo_id)
        .bind(request.cliente)
        .bind(fecha_inicio)
        .bind(request.kilometraje_salida)
        .bind(request.motivo)
        .bind(request.observaciones.unwrap_or_default())
        .fetch_one(&mut *tx)
        .await?;

        estado_service::sincronizar_estado_vehiculo(&mut tx, asignacion.vehiculo_id, asignacion.id, true)
            .await?;

        tx.commit().await?;

        Ok(asignacion)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Asignacion>, AppError> {
        let asignacion = sqlx::query_as::<_, Asignacion>("SELECT * FROM asignaciones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(asignacion)
    }

    /// Listado con matrícula, ordenado por fecha de inicio descendente
    pub async fn list(
        &self,
        filtro: FiltroActividad,
    ) -> Result<Vec<AsignacionConVehiculo>, AppError> {
        let orden = " ORDER BY a.fecha_inicio DESC";

        let asignaciones = match filtro {
            FiltroActividad::Activas => {
                let sql = format!("{} WHERE a.activa = TRUE{}", SELECT_CON_VEHICULO, orden);
                sqlx::query_as::<_, AsignacionConVehiculo>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            FiltroActividad::Finalizadas => {
                let sql = format!("{} WHERE a.activa = FALSE{}", SELECT_CON_VEHICULO, orden);
                sqlx::query_as::<_, AsignacionConVehiculo>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            FiltroActividad::Todas => {
                let sql = format!("{}{}", SELECT_CON_VEHICULO, orden);
                sqlx::query_as::<_, AsignacionConVehiculo>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(asignaciones)
    }

    /// Asignaciones activas más recientes (para el dashboard)
    pub async fn activas_recientes(
        &self,
        limite: i64,
    ) -> Result<Vec<AsignacionConVehiculo>, AppError> {
        let sql = format!(
            "{} WHERE a.activa = TRUE ORDER BY a.fecha_inicio DESC LIMIT $1",
            SELECT_CON_VEHICULO
        );

        let asignaciones = sqlx::query_as::<_, AsignacionConVehiculo>(&sql)
            .bind(limite)
            .fetch_all(&self.pool)
            .await?;

        Ok(asignaciones)
    }

    /// Historial reciente de un vehículo (para la vista de detalle)
    pub async fn por_vehiculo(
        &self,
        vehiculo_id: Uuid,
        limite: i64,
    ) -> Result<Vec<Asignacion>, AppError> {
        let asignaciones = sqlx::query_as::<_, Asignacion>(
            "SELECT * FROM asignaciones WHERE vehiculo_id = $1 ORDER BY fecha_inicio DESC LIMIT $2",
        )
        .bind(vehiculo_id)
        .bind(limite)
        .fetch_all(&self.pool)
        .await?;

        Ok(asignaciones)
    }

    /// Finalizar una asignación: cierra el registro, copia el kilometraje
    /// de entrada al vehículo y reevalúa su estado.
    pub async fn finalizar(
        &self,
        id: Uuid,
        request: FinalizarAsignacionRequest,
    ) -> Result<Asignacion, AppError> {
        let mut tx = self.pool.begin().await?;

        let actual = sqlx::query_as::<_, Asignacion>(
            "SELECT * FROM asignaciones WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Asignación no encontrada".to_string()))?;

        if !actual.activa {
            return Err(AppError::Conflict(
                "La asignación ya está finalizada".to_string(),
            ));
        }

        if request.kilometraje_entrada < actual.kilometraje_salida {
            return Err(validation_error(
                "kilometraje_entrada",
                "El kilometraje de entrada no puede ser menor que el de salida",
            ));
        }

        let fecha_fin = request.fecha_fin.unwrap_or_else(Utc::now);

        let asignacion = sqlx::query_as::<_, Asignacion>(
            r#"
            UPDATE asignaciones
            SET activa = FALSE, fecha_fin = $2, kilometraje_entrada = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(fecha_fin)
        .bind(request.kilometraje_entrada)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehiculos SET kilometraje = $1 WHERE id = $2")
            .bind(request.kilometraje_entrada)
            .bind(asignacion.vehiculo_id)
            .execute(&mut *tx)
            .await?;

        estado_service::sincronizar_estado_vehiculo(&mut tx, asignacion.vehiculo_id, asignacion.id, false)
            .await?;

        tx.commit().await?;

        Ok(asignacion)
    }
}
