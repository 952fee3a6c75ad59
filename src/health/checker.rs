//! Pull-based health checking.
//!
//! # Responsibilities
//! - Run the liveness probe on demand
//! - Record the outcome in the server-owned `HealthState`
//! - Build the report for each request
//!
//! # Design Decisions
//! - No background polling: every request re-runs the full probe
//! - Probe failures are absorbed; `check` cannot fail
//! - The lock is never held across an await point

use chrono::Utc;
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use crate::config::ProbeConfig;
use crate::health::probe::LivenessProbe;
use crate::health::report::HealthReport;
use crate::health::state::{HealthState, HealthStatus};
use crate::observability::metrics;

/// Owns the health state and the probe that updates it.
pub struct HealthChecker {
    probe: LivenessProbe,
    state: Mutex<HealthState>,
}

impl HealthChecker {
    pub fn new(probe: LivenessProbe) -> Self {
        Self {
            probe,
            state: Mutex::new(HealthState::new()),
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(LivenessProbe::from_config(config))
    }

    /// Re-evaluate bot liveness and store the result.
    pub fn probe_liveness(&self) -> HealthStatus {
        let now = Utc::now();
        let status = self.probe.evaluate(SystemTime::from(now));
        self.state().record(status, now);

        metrics::record_probe(status);
        status
    }

    /// Probe, then snapshot the state into a report.
    pub fn check(&self) -> HealthReport {
        self.probe_liveness();

        let state = self.state();
        HealthReport {
            status: state.status(),
            uptime_seconds: state.uptime_seconds(),
            last_check: state.last_check(),
            timestamp: Utc::now(),
        }
    }

    /// Copy of the current state without probing.
    pub fn snapshot(&self) -> HealthState {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, HealthState> {
        // A panic mid-record leaves the state whole, so poisoning is harmless.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
