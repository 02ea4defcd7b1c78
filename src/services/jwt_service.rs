//! Servicio de JWT
//!
//! Emisión y validación de tokens HS256 para el administrador.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Claims del token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub admin: bool,
    pub exp: usize,
    pub iat: usize,
}

pub struct JwtService {
    secret: String,
    expiration: u64,
}

impl JwtService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }

    /// Segundos de validez de los tokens emitidos
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Generar un token para un usuario
    pub fn generar_token(&self, usuario: &str, admin: bool) -> Result<String, AppError> {
        let ahora = Utc::now();
        let expira = ahora + Duration::seconds(self.expiration as i64);

        let claims = Claims {
            sub: usuario.to_string(),
            admin,
            exp: expira.timestamp() as usize,
            iat: ahora.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))
    }

    /// Validar un token y devolver sus claims
    pub fn validar_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("Token inválido: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_de_prueba() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "postgres://localhost/gescoches_test".to_string(),
            jwt_secret: "secreto-de-prueba".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            admin_usuario: "admin".to_string(),
            admin_password: "Admin123456".to_string(),
            semanas_retencion: 3,
        }
    }

    #[test]
    fn test_token_emitido_se_valida() {
        let servicio = JwtService::new(&config_de_prueba());
        let token = servicio.generar_token("admin", true).unwrap();

        let claims = servicio.validar_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
    }

    #[test]
    fn test_claim_admin_false_se_conserva() {
        let servicio = JwtService::new(&config_de_prueba());
        let token = servicio.generar_token("consulta", false).unwrap();

        let claims = servicio.validar_token(&token).unwrap();
        assert!(!claims.admin);
    }

    #[test]
    fn test_token_expirado_se_rechaza() {
        let servicio = JwtService::new(&config_de_prueba());

        let ahora = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            admin: true,
            exp: (ahora.timestamp() - 1000) as usize,
            iat: (ahora.timestamp() - 2000) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secreto-de-prueba".as_ref()),
        )
        .unwrap();

        assert!(servicio.validar_token(&token).is_err());
    }

    #[test]
    fn test_token_con_otro_secreto_se_rechaza() {
        let servicio = JwtService::new(&config_de_prueba());

        let mut otra_config = config_de_prueba();
        otra_config.jwt_secret = "otro-secreto".to_string();
        let otro_servicio = JwtService::new(&otra_config);

        let token = otro_servicio.generar_token("admin", true).unwrap();
        assert!(servicio.validar_token(&token).is_err());
    }
}
