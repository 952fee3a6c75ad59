//! Bot health state.
//!
//! # States
//! - Unknown: no probe has run yet
//! - Healthy: log file touched within the freshness threshold
//! - Stale: log file exists but is older than the threshold
//! - NoLogs: log file does not exist
//! - Error: log file metadata could not be read
//!
//! # Design Decisions
//! - Status is overwritten wholesale by each probe, never patched
//! - Uptime is measured on the monotonic clock so it never goes backwards
//! - Nothing is persisted; a restart is itself a liveness event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Outcome of the most recent liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Unknown,
    Healthy,
    Stale,
    NoLogs,
    Error,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 5] = [
        HealthStatus::Unknown,
        HealthStatus::Healthy,
        HealthStatus::Stale,
        HealthStatus::NoLogs,
        HealthStatus::Error,
    ];

    /// Wire name, as it appears in the JSON report.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "unknown",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Stale => "stale",
            HealthStatus::NoLogs => "no_logs",
            HealthStatus::Error => "error",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-lifetime health record owned by the health server.
#[derive(Debug, Clone)]
pub struct HealthState {
    start_time: DateTime<Utc>,
    started: Instant,
    status: HealthStatus,
    last_check: Option<DateTime<Utc>>,
}

impl HealthState {
    /// Capture the process start time.
    pub fn new() -> Self {
        Self {
            start_time: Utc::now(),
            started: Instant::now(),
            status: HealthStatus::Unknown,
            last_check: None,
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn last_check(&self) -> Option<DateTime<Utc>> {
        self.last_check
    }

    /// Store the outcome of a probe that ran at `checked_at`.
    pub fn record(&mut self, status: HealthStatus, checked_at: DateTime<Utc>) {
        self.status = status;
        self.last_check = Some(checked_at);
    }

    /// Whole seconds since the state was created.
    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}
