//! # Regal Quote API
//!
//! HTTP server exposing the BOM engine to the configurator frontend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote API Server                                 │
//! │                                                                         │
//! │  Configurator ───► HTTP (8080) ───► regal-core ───► regal-export      │
//! │                                     (pure)          (quote store)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use regal_export::store::QuoteStore;

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting Regal quote API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        store_dir = %config.store_dir.display(),
        "Configuration loaded"
    );

    // Quote store root must exist before the first save
    std::fs::create_dir_all(&config.store_dir)?;

    // Create shared state
    let state = Arc::new(AppState {
        store: QuoteStore::new(&config.store_dir),
    });

    // Build server address
    let app = routes::router(state);
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Starting HTTP server");

    // Start server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Shared application state.
pub struct AppState {
    pub store: QuoteStore,
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
