use std::sync::Arc;

use anyhow::Context;
use lyrics_api::{
    AppState, build_router,
    db::Database,
    secrets::{SECRET_MANAGER, StoreBackend},
    seed::demo_songs,
    store::{MemoryStore, SongStore},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,lyrics_api=debug")),
        )
        .with_target(false)
        .init();

    let store: Arc<dyn SongStore> = match SECRET_MANAGER.store_backend()? {
        StoreBackend::Postgres => {
            let database = Database::new(
                &SECRET_MANAGER.get("DATABASE_URL"),
                SECRET_MANAGER.max_connections()?,
            )
            .await
            .context("failed to connect to database")?;
            info!("📊 Connected to PostgreSQL database");

            database
                .migrate()
                .await
                .context("failed to run database migrations")?;
            info!("📊 Database migrations completed");

            Arc::new(database)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory song store; data is lost on shutdown");
            Arc::new(MemoryStore::with_songs(demo_songs()))
        }
    };

    let app = build_router(AppState::from_secrets(store, &SECRET_MANAGER));

    let addr = format!("{}:{}", SECRET_MANAGER.get("HOST"), SECRET_MANAGER.port()?);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("🎵 Lyrics API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
