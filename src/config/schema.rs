//! Configuration schema definitions.
//!
//! Every field has a default, and the defaults reproduce the values the
//! health server has always run with (port 8000, `bot.log`, five minute
//! freshness). A config file only needs the keys it changes.

use serde::{Deserialize, Serialize};

/// Root configuration shared by the health server and the keep-alive server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HealthConfig {
    /// Health server listener.
    pub listener: ListenerConfig,

    /// Liveness probe settings.
    pub probe: ProbeConfig,

    /// Idle loop settings.
    pub lifecycle: LifecycleConfig,

    /// Keep-alive server settings.
    pub keep_alive: KeepAliveConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Liveness probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Log file written by the bot, relative to the working directory.
    pub log_path: String,

    /// Maximum age of the log file before the bot is considered stale.
    pub freshness_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            log_path: "bot.log".to_string(),
            freshness_secs: 300,
        }
    }
}

/// Process lifecycle configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Interval of the no-op wake while idling between startup and shutdown.
    pub idle_wake_secs: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            idle_wake_secs: 3600,
        }
    }
}

/// Keep-alive server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct KeepAliveConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Plain-text body returned to the uptime monitor.
    pub message: String,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            message: "Bot is alive!".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
