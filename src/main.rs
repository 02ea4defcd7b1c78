use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;
use gescoches_backend::config::environment::EnvironmentConfig;
use gescoches_backend::database;
use gescoches_backend::routes::create_app_router;
use gescoches_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 GesCoches - Gestión de Vehículos de Sustitución");
    info!("==================================================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar base de datos
    info!(
        "📦 Conectando a {}",
        database::mask_database_url(&config.database_url)
    );
    let pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(pool, config)?;
    let app = create_app_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/dashboard - Resumen de la flota");
    info!("🚗 Vehículos:");
    info!("   POST /api/vehiculos - Dar de alta un vehículo");
    info!("   GET  /api/vehiculos?estado=X - Listar vehículos");
    info!("   GET  /api/vehiculos/:id - Detalle con historial");
    info!("   PUT  /api/vehiculos/:id - Actualizar vehículo");
    info!("   DELETE /api/vehiculos/:id - Eliminar vehículo");
    info!("📋 Asignaciones:");
    info!("   POST /api/asignaciones - Crear asignación");
    info!("   GET  /api/asignaciones?filtro=activas|finalizadas|todas - Listar");
    info!("   GET  /api/asignaciones/:id - Obtener asignación");
    info!("   POST /api/asignaciones/:id/finalizar - Finalizar asignación");
    info!("🔧 Mantenimientos:");
    info!("   POST /api/mantenimientos - Registrar mantenimiento");
    info!("   GET  /api/mantenimientos?filtro=pendientes|completados|todos - Listar");
    info!("   POST /api/mantenimientos/:id/finalizar - Completar mantenimiento");
    info!("🔐 Administración:");
    info!("   POST /api/auth/login - Login de administrador");
    info!("   GET  /admin/limpiar-asignaciones - Previsualizar limpieza");
    info!("   POST /admin/limpiar-asignaciones - Ejecutar limpieza (confirmar=si)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
