//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub admin_usuario: String,
    pub admin_password: String,
    pub semanas_retencion: i64,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno.
    /// DATABASE_URL es obligatoria; el resto tiene defaults de desarrollo.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set in environment variables")?,
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "gescoches-dev-secret".to_string()),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "28800".to_string())
                .parse()
                .context("JWT_EXPIRATION must be a valid number")?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            // Credenciales por defecto del seed original de administración
            admin_usuario: env::var("ADMIN_USUARIO").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "Admin123456".to_string()),
            semanas_retencion: env::var("SEMANAS_RETENCION")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("SEMANAS_RETENCION must be a valid number")?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
