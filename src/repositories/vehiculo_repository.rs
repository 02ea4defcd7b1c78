//! Repositorio de vehículos

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehiculo_dto::UpdateVehiculoRequest;
use crate::models::vehiculo::{EstadoVehiculo, Vehiculo};
use crate::utils::errors::AppError;

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        matricula: String,
        marca: String,
        modelo: String,
        color: String,
        anio: i32,
        kilometraje: i32,
        fecha_alta: Option<NaiveDate>,
        observaciones: String,
    ) -> Result<Vehiculo, AppError> {
        let id = Uuid::new_v4();
        let fecha_alta = fecha_alta.unwrap_or_else(|| Utc::now().date_naive());

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            INSERT INTO vehiculos (id, matricula, marca, modelo, color, anio, estado, kilometraje, fecha_alta, observaciones, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(matricula)
        .bind(marca)
        .bind(modelo)
        .bind(color)
        .bind(anio)
        .bind(EstadoVehiculo::Disponible)
        .bind(kilometraje)
        .bind(fecha_alta)
        .bind(observaciones)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehiculo>, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehiculo)
    }

    /// Listado de la flota, opcionalmente filtrado por estado.
    /// Mismo orden que el panel original: estado y después matrícula.
    pub async fn list(&self, estado: Option<EstadoVehiculo>) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos = match estado {
            Some(estado) => {
                sqlx::query_as::<_, Vehiculo>(
                    "SELECT * FROM vehiculos WHERE estado = $1 ORDER BY estado, matricula",
                )
                .bind(estado)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos ORDER BY estado, matricula")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(vehiculos)
    }

    pub async fn matricula_exists(
        &self,
        matricula: &str,
        excluir: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let existe: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM vehiculos WHERE matricula = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(matricula)
        .bind(excluir)
        .fetch_one(&self.pool)
        .await?;

        Ok(existe)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehiculoRequest,
    ) -> Result<Vehiculo, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            UPDATE vehiculos
            SET matricula = $2, marca = $3, modelo = $4, color = $5, anio = $6,
                estado = $7, kilometraje = $8, fecha_ultima_revision = $9, observaciones = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.matricula.unwrap_or(actual.matricula))
        .bind(request.marca.unwrap_or(actual.marca))
        .bind(request.modelo.unwrap_or(actual.modelo))
        .bind(request.color.unwrap_or(actual.color))
        .bind(request.anio.unwrap_or(actual.anio))
        .bind(request.estado.unwrap_or(actual.estado))
        .bind(request.kilometraje.unwrap_or(actual.kilometraje))
        .bind(request.fecha_ultima_revision.or(actual.fecha_ultima_revision))
        .bind(request.observaciones.unwrap_or(actual.observaciones))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    /// Elimina el vehículo; asignaciones y mantenimientos caen en cascada
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn contar_total(&self) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehiculos")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn contar_por_estado(&self, estado: EstadoVehiculo) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehiculos WHERE estado = $1")
            .bind(estado)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
