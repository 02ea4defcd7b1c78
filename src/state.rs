//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    /// Hash bcrypt de la contraseña del administrador, calculado al arrancar
    pub admin_password_hash: String,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Result<Self> {
        let admin_password_hash = bcrypt::hash(&config.admin_password, bcrypt::DEFAULT_COST)
            .context("Error generando el hash de la contraseña de administrador")?;

        Ok(Self {
            pool,
            config,
            admin_password_hash,
        })
    }

    /// Variante para tests: coste bcrypt mínimo para no penalizar la suite
    pub fn new_with_cost(pool: PgPool, config: EnvironmentConfig, cost: u32) -> Result<Self> {
        let admin_password_hash = bcrypt::hash(&config.admin_password, cost)
            .context("Error generando el hash de la contraseña de administrador")?;

        Ok(Self {
            pool,
            config,
            admin_password_hash,
        })
    }
}
