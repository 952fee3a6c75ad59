//! Liveness monitoring for a Telegram bot deployment.
//!
//! - `bot-health`: HTTP health server inferring bot liveness from log-file recency
//! - `keep-alive`: independent ping endpoint for external uptime monitors
//! - `health-cli`: queries a running health server

pub mod client;
pub mod config;
pub mod health;
pub mod http;
pub mod keep_alive;
pub mod lifecycle;
pub mod observability;

pub use client::HealthClient;
pub use config::HealthConfig;
pub use health::{HealthChecker, HealthReport, HealthStatus};
pub use http::HealthServer;
pub use keep_alive::KeepAliveServer;
pub use lifecycle::Shutdown;
