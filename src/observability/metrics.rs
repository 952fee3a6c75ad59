//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bot_health_probes_total` (counter): probe outcomes by status
//! - `bot_health_status_healthy` (gauge): 1=healthy, 0=anything else
//! - `bot_health_responses_total` (counter): health responses by HTTP code
//! - `keep_alive_pings_total` (counter): keep-alive hits
//!
//! # Design Decisions
//! - Exporter installed only when enabled in config
//! - Recording without an installed recorder is a no-op, so tests need no setup

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::health::HealthStatus;

/// Start the Prometheus scrape endpoint on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record the outcome of one liveness probe.
pub fn record_probe(status: HealthStatus) {
    counter!("bot_health_probes_total", "status" => status.as_str()).increment(1);
    gauge!("bot_health_status_healthy").set(if status.is_healthy() { 1.0 } else { 0.0 });
}

/// Record the HTTP code of a health response.
pub fn record_response(code: u16) {
    counter!("bot_health_responses_total", "code" => code.to_string()).increment(1);
}

/// Record one keep-alive ping.
pub fn record_keep_alive() {
    counter!("keep_alive_pings_total").increment(1);
}
