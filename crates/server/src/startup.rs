use std::net::SocketAddr;

use axum::Router;
use common::env::ensure_env;
use configs::{AppConfig, ServerConfig};
use models::db::Storage;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Startup hook: `closed -> open`. Re-running on an open handle does nothing.
pub async fn on_startup(storage: &Storage) -> anyhow::Result<()> {
    info!(event = "connecting", "Connecting...");
    if !storage.open().await? {
        warn!("storage was already open");
    }
    Ok(())
}

/// Shutdown hook: `open -> closed`. Re-running on a closed handle does nothing.
pub async fn on_shutdown(storage: &Storage) -> anyhow::Result<()> {
    info!(event = "closing", "Closing...");
    storage.close().await?;
    Ok(())
}

/// Wire state, CORS and static mount into the application router.
pub fn build_app(storage: Storage, cfg: &AppConfig) -> Router {
    routes::build_router(ServerState::new(storage), build_cors(), &cfg.assets.static_dir)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: open storage, serve until Ctrl+C, then close storage.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    ensure_env(&cfg.assets.static_dir).await?;

    let storage = Storage::new(cfg.database.clone());
    on_startup(&storage).await?;

    let app = build_app(storage.clone(), &cfg);
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting contacts server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // close even when serving failed, then report the serve error
    on_shutdown(&storage).await?;
    served?;
    Ok(())
}
