//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve configuration: file, then flags and environment
//! - Initialize logging and metrics
//! - Bind the listener and run the server until a signal arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{validate_config, ConfigError, ProxyConfig};
use crate::config::loader::read_config;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command-line flags. Each also reads an environment variable.
#[derive(Debug, Parser)]
#[command(name = "render-proxy")]
#[command(about = "Renders an upstream JSON API as HTML pages and proxies its images", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "RENDER_PROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(short, long, env = "RENDER_PROXY_BIND")]
    pub bind: Option<String>,

    /// Base URL of the data API
    #[arg(long, env = "RENDER_PROXY_DATA_ORIGIN")]
    pub data_origin: Option<String>,

    /// Base URL of the image host
    #[arg(long, env = "RENDER_PROXY_ASSET_ORIGIN")]
    pub asset_origin: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, env = "RENDER_PROXY_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RENDER_PROXY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file (or defaults), apply flag overrides, then validate.
    pub fn resolve(&self) -> Result<ProxyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ProxyConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(origin) = &self.data_origin {
            config.upstream.data_origin = origin.clone();
        }
        if let Some(origin) = &self.asset_origin {
            config.upstream.asset_origin = origin.clone();
        }
        if let Some(secs) = self.upstream_timeout_secs {
            config.upstream.timeout_secs = secs;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// Run the proxy until SIGINT/SIGTERM.
pub async fn run(cli: Cli) -> Result<(), StartupError> {
    let config = cli.resolve()?;
    logging::init(&config.observability);

    tracing::info!("render-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
