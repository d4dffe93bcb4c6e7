//! Pavilion Sports back office API server

use pavilion_admin::config::Settings;
use pavilion_admin::db::{schema, Database};
use pavilion_admin::routes::create_router;
use pavilion_admin::state::AppState;
use pavilion_admin::telemetry::init_tracing;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("🚀 Starting Pavilion Sports back office API...");

    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    let db = Database::from_config(&settings.database)?;
    if let Err(e) = db.verify().await {
        error!("❌ FATAL: Failed to connect to database: {}", e);
        error!("DATABASE_URL must be set in .env and database must be accessible");
        return Err(e.into());
    }

    if let Err(e) = schema::ensure_gallery_schema(&db).await {
        warn!("⚠️  Warning creating gallery tables: {}", e);
    }

    let state = Arc::new(AppState::new(db));
    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("📚 API Endpoints:");
    info!("   GET    /api/gallery                           - Active albums (?type=)");
    info!("   POST   /api/gallery                           - Create album");
    info!("   GET    /api/gallery/{{id}}                      - Active album with items");
    info!("   GET    /api/admin/gallery                     - All albums with item counts");
    info!("   GET    /api/admin/gallery/{{id}}                - Album (any status)");
    info!("   PUT    /api/admin/gallery/{{id}}                - Update album");
    info!("   DELETE /api/admin/gallery/{{id}}                - Delete album");
    info!("   GET    /api/admin/gallery/{{id}}/items          - Album items");
    info!("   POST   /api/admin/gallery/{{id}}/items          - Add item");
    info!("   PUT    /api/admin/gallery/{{id}}/items/{{item}}   - Update item");
    info!("   DELETE /api/admin/gallery/{{id}}/items/{{item}}   - Delete item");
    info!("   GET    /api/admin/inventory-hierarchy         - Collections and products");
    info!("   GET    /api/admin/customers                   - Retail and B2B customers");
    info!("   PATCH  /api/admin/customers/{{id}}/status       - Activate/deactivate customer");
    info!("   GET    /api/admin/activity-logs               - Activity feed");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
