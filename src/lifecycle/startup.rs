//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging, then metrics
//! - Bind listeners
//!
//! # Design Decisions
//! - Fail fast: config and bind errors are fatal
//! - A metrics endpoint that fails to start is logged, not fatal

use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;

use crate::config::{load_or_default, ConfigError, HealthConfig};
use crate::http::ServerError;
use crate::observability::{logging, metrics};

/// Load config (defaults when `path` is `None`) and bring up logging and
/// metrics.
pub fn bootstrap(path: Option<&Path>) -> Result<HealthConfig, ConfigError> {
    let config = load_or_default(path)?;
    logging::init_logging(&config.observability);

    tracing::info!(
        config_file = ?path,
        log_path = %config.probe.log_path,
        freshness_secs = config.probe.freshness_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    Ok(config)
}

/// Bind a TCP listener on `address`.
pub async fn bind(address: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.to_string(),
            source,
        })
}
