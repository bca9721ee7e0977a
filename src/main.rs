use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, error};
use dotenvy::dotenv;

use autofix::config::EnvironmentConfig;
use autofix::database::DatabaseConnection;
use autofix::routes::create_app_router;
use autofix::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🔧 AutoFix - Gestión de taller mecánico");
    info!("========================================");
    if config.is_development() {
        info!("🧪 Entorno de desarrollo");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let addr: SocketAddr = config.server_url().parse()?;

    let app = create_app_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("🚗 Vehículos:");
    info!("   POST/GET /api/vehicle - Crear / listar vehículos");
    info!("   GET/PUT/DELETE /api/vehicle/:id - Obtener / actualizar / eliminar");
    info!("🛠️ Reparaciones:");
    info!("   POST/GET /api/repair - Crear / listar reparaciones");
    info!("   GET  /api/repair/details - Reparaciones con datos del vehículo");
    info!("   POST /api/repair/register - Registrar reparación con lista de precios");
    info!("   GET/PUT/DELETE /api/repair/:id - Obtener / actualizar / eliminar");
    info!("💰 Precios:");
    info!("   GET  /api/repair-type - Lista de precios");
    info!("   GET  /api/repair-type/:key - Tipo por código o nombre");
    info!("   GET  /api/pricing/base-cost - Precio base");
    info!("   GET  /api/pricing/discount-rate - Tasa de descuento");
    info!("   POST /api/pricing/discount - Monto de descuento");
    info!("   POST /api/pricing/quote - Cotización desglosada");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
