//! Repositorio de mantenimientos

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::mantenimiento_dto::{CreateMantenimientoRequest, FiltroCompletado};
use crate::models::mantenimiento::{Mantenimiento, MantenimientoConVehiculo};
use crate::models::vehiculo::EstadoVehiculo;
use crate::utils::errors::AppError;

const SELECT_CON_VEHICULO: &str = "SELECT m.id, m.vehiculo_id, v.matricula, m.tipo, \
     m.fecha_entrada, m.fecha_salida, m.descripcion, m.coste, m.taller, m.completado \
     FROM mantenimientos m \
     JOIN vehiculos v ON v.id = m.vehiculo_id";

pub struct MantenimientoRepository {
    pool: PgPool,
}

impl MantenimientoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: CreateMantenimientoRequest,
    ) -> Result<Mantenimiento, AppError> {
        let vehiculo_existe: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vehiculos WHERE id = $1)")
                .bind(request.vehiculo_id)
                .fetch_one(&self.pool)
                .await?;

        if !vehiculo_existe {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        let id = Uuid::new_v4();
        let fecha_entrada = request
            .fecha_entrada
            .unwrap_or_else(|| Utc::now().date_naive());

        let mantenimiento = sqlx::query_as::<_, Mantenimiento>(
            r#"
            INSERT INTO mantenimientos (id, vehiculo_id, tipo, fecha_entrada, descripcion, coste, taller, completado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.vehiculo_id)
        .bind(request.tipo)
        .bind(fecha_entrada)
        .bind(request.descripcion)
        .bind(request.coste.unwrap_or(Decimal::ZERO))
        .bind(request.taller.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(mantenimiento)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mantenimiento>, AppError> {
        let mantenimiento =
            sqlx::query_as::<_, Mantenimiento>("SELECT * FROM mantenimientos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(mantenimiento)
    }

    /// Listado con matrícula, ordenado por fecha de entrada descendente
    pub async fn list(
        &self,
        filtro: FiltroCompletado,
    ) -> Result<Vec<MantenimientoConVehiculo>, AppError> {
        let orden = " ORDER BY m.fecha_entrada DESC";

        let mantenimientos = match filtro {
            FiltroCompletado::Pendientes => {
                let sql = format!("{} WHERE m.completado = FALSE{}", SELECT_CON_VEHICULO, orden);
                sqlx::query_as::<_, MantenimientoConVehiculo>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            FiltroCompletado::Completados => {
                let sql = format!("{} WHERE m.completado = TRUE{}", SELECT_CON_VEHICULO, orden);
                sqlx::query_as::<_, MantenimientoConVehiculo>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            FiltroCompletado::Todos => {
                let sql = format!("{}{}", SELECT_CON_VEHICULO, orden);
                sqlx::query_as::<_, MantenimientoConVehiculo>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(mantenimientos)
    }

    /// Historial reciente de un vehículo (para la vista de detalle)
    pub async fn por_vehiculo(
        &self,
        vehiculo_id: Uuid,
        limite: i64,
    ) -> Result<Vec<Mantenimiento>, AppError> {
        let mantenimientos = sqlx::query_as::<_, Mantenimiento>(
            "SELECT * FROM mantenimientos WHERE vehiculo_id = $1 ORDER BY fecha_entrada DESC LIMIT $2",
        )
        .bind(vehiculo_id)
        .bind(limite)
        .fetch_all(&self.pool)
        .await?;

        Ok(mantenimientos)
    }

    /// Marcar el trabajo como completado: fija la fecha de salida, actualiza
    /// la última revisión del vehículo y lo devuelve a DISPONIBLE.
    pub async fn finalizar(
        &self,
        id: Uuid,
        fecha_salida: Option<NaiveDate>,
    ) -> Result<Mantenimiento, AppError> {
        let mut tx = self.pool.begin().await?;

        let actual = sqlx::query_as::<_, Mantenimiento>(
            "SELECT * FROM mantenimientos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Mantenimiento no encontrado".to_string()))?;

        if actual.completado {
            return Err(AppError::Conflict(
                "El mantenimiento ya está completado".to_string(),
            ));
        }

        let fecha_salida = fecha_salida.unwrap_or_else(|| Utc::now().date_naive());

        let mantenimiento = sqlx::query_as::<_, Mantenimiento>(
            r#"
            UPDATE mantenimientos
            SET completado = TRUE, fecha_salida = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(fecha_salida)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE vehiculos SET fecha_ultima_revision = $1, estado = $2 WHERE id = $3",
        )
        .bind(fecha_salida)
        .bind(EstadoVehiculo::Disponible)
        .bind(mantenimiento.vehiculo_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(mantenimiento)
    }
}
