//! Controlador de la limpieza de asignaciones antiguas
//!
//! La previsualización nunca borra; la ejecución exige confirmar=si.

use sqlx::PgPool;

use crate::dto::limpieza_dto::{
    AsignacionAntiguaResponse, EjecutarLimpiezaRequest, LimpiezaPreviewResponse,
    LimpiezaResultadoResponse,
};
use crate::dto::ApiResponse;
use crate::services::limpieza_service::LimpiezaService;
use crate::utils::errors::AppError;

pub struct LimpiezaController {
    service: LimpiezaService,
    semanas_por_defecto: i64,
}

impl LimpiezaController {
    pub fn new(pool: PgPool, semanas_por_defecto: i64) -> Self {
        Self {
            service: LimpiezaService::new(pool),
            semanas_por_defecto,
        }
    }

    fn semanas(&self, solicitadas: Option<i64>) -> Result<i64, AppError> {
        let semanas = solicitadas.unwrap_or(self.semanas_por_defecto);
        if semanas < 1 {
            return Err(AppError::BadRequest(
                "El número de semanas debe ser al menos 1".to_string(),
            ));
        }
        Ok(semanas)
    }

    pub async fn previsualizar(
        &self,
        semanas: Option<i64>,
    ) -> Result<LimpiezaPreviewResponse, AppError> {
        let semanas = self.semanas(semanas)?;
        let resumen = self.service.previsualizar(semanas).await?;

        Ok(LimpiezaPreviewResponse {
            semanas: resumen.semanas,
            fecha_limite: resumen.fecha_limite,
            total: resumen.total,
            muestra: resumen
                .muestra
                .into_iter()
                .map(|a| AsignacionAntiguaResponse {
                    id: a.id,
                    matricula: a.matricula,
                    cliente: a.cliente,
                    fecha_fin: a.fecha_fin,
                })
                .collect(),
        })
    }

    /// Sin confirmar=si la operación se queda en previsualización y no
    /// elimina ninguna fila.
    pub async fn ejecutar(
        &self,
        request: EjecutarLimpiezaRequest,
    ) -> Result<ApiResponse<LimpiezaResultadoResponse>, AppError> {
        let semanas = self.semanas(request.semanas)?;

        if !request.confirmado() {
            let resumen = self.service.previsualizar(semanas).await?;
            return Ok(ApiResponse {
                success: true,
                message: Some(format!(
                    "Sin confirmar=si no se elimina nada. {} asignaciones cumplen el criterio",
                    resumen.total
                )),
                data: Some(LimpiezaResultadoResponse {
                    semanas,
                    fecha_limite: resumen.fecha_limite,
                    eliminadas: 0,
                }),
            });
        }

        let (fecha_limite, eliminadas) = self.service.ejecutar(semanas).await?;

        Ok(ApiResponse::success_with_message(
            LimpiezaResultadoResponse {
                semanas,
                fecha_limite,
                eliminadas,
            },
            format!("Se eliminaron {} asignaciones", eliminadas),
        ))
    }
}
