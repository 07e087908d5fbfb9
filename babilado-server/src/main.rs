//! Babilado server binary

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use babilado_core::config;
use babilado_server::{build_router, shutdown_signal, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("babilado=info")?;

    let config = config::from_env().context("Failed to load configuration")?;

    match &config.provider.credential {
        Some(credential) => info!(
            "Provider credential loaded ({})",
            credential.partial_redact()
        ),
        None => warn!("No provider credential configured; chat calls will fail until one is set"),
    }

    let listen_addr = config.server.listen_addr;
    let state = AppState::new(config).context("Failed to initialize application state")?;
    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    info!("Listening on {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Initialize tracing, honoring RUST_LOG with a sensible default.
fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
