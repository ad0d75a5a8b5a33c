//! Edge router binary.
//!
//! Initializes logging, loads configuration (optional TOML file plus the
//! `BACKEND_URL` environment override), binds the listener, and runs the
//! HTTP server until Ctrl+C.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edge_router::config::{load_config, RouterConfig};
use edge_router::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file; defaults otherwise.
    let config = match std::env::var("ROUTER_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => RouterConfig::default(),
    };
    let config = config.with_env_overrides();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.observability.log_level)
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("edge-router v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        asset_root = %config.assets.root,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Translate Ctrl+C into a shutdown trigger.
    let shutdown = Shutdown::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_shutdown.trigger();
        }
    });

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
