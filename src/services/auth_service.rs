//! Servicio de autenticación
//!
//! Un único principal de administración configurado por entorno. El hash
//! bcrypt de su contraseña se calcula al arrancar y vive en el estado
//! compartido.

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthService {
    jwt: JwtService,
    admin_usuario: String,
    admin_password_hash: String,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig, admin_password_hash: String) -> Self {
        Self {
            jwt: JwtService::new(config),
            admin_usuario: config.admin_usuario.clone(),
            admin_password_hash,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.config, state.admin_password_hash.clone())
    }

    /// Verificar credenciales y emitir un token de administrador
    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        if request.usuario != self.admin_usuario {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let valido = bcrypt::verify(&request.password, &self.admin_password_hash)
            .map_err(|e| AppError::Internal(format!("Error verificando credenciales: {}", e)))?;

        if !valido {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = self.jwt.generar_token(&request.usuario, true)?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.expiration(),
        })
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

    fn servicio_de_prueba() -> AuthService {
        let config = config_de_prueba();
        // Coste mínimo de bcrypt para no penalizar la suite
        let hash = bcrypt::hash(&config.admin_password, 4).unwrap();
        AuthService::new(&config, hash)
    }

    #[test]
    fn test_login_correcto_emite_token_admin() {
        let servicio = servicio_de_prueba();
        let response = servicio
            .login(&LoginRequest {
                usuario: "admin".to_string(),
                password: "Admin123456".to_string(),
            })
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);

        let claims = JwtService::new(&config_de_prueba())
            .validar_token(&response.token)
            .unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
    }

    #[test]
    fn test_login_password_incorrecta() {
        let servicio = servicio_de_prueba();
        let resultado = servicio.login(&LoginRequest {
            usuario: "admin".to_string(),
            password: "otra-password".to_string(),
        });

        assert!(matches!(resultado, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_login_usuario_desconocido() {
        let servicio = servicio_de_prueba();
        let resultado = servicio.login(&LoginRequest {
            usuario: "intruso".to_string(),
            password: "Admin123456".to_string(),
        });

        assert!(matches!(resultado, Err(AppError::Unauthorized(_))));
    }
}
