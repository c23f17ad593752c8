//! Server module for Wardround
//!
//! Contains configuration loading, router assembly and the runtime loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use wardround_core::{Catalog, PatientStore};

use crate::api::{game_routes, health_routes, GameState};
use crate::cli::Cli;

/// Built-in defaults, overridable by file and environment.
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000
"#;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Load configuration: embedded defaults, then an optional TOML file,
/// then `WARDROUND_*` environment variables (highest priority).
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    if let Some(path) = &cli.config {
        builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
    }

    let config: AppConfig = builder
        // prefix_separator("_") so WARDROUND_SERVER__PORT works (single _
        // after the prefix, __ between nesting levels).
        .add_source(
            Environment::with_prefix("WARDROUND")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    Ok(config)
}

/// Build the application router with all endpoints and layers.
pub fn router(state: GameState) -> Router {
    Router::new()
        .merge(health_routes(state.clone()))
        .merge(game_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let store = Arc::new(PatientStore::new(Catalog::builtin()));
    let app = router(GameState::new(store));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("quiz server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
