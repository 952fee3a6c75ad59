//! JSON health report.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::health::state::HealthStatus;

/// Body returned by `GET /` and `GET /health`.
///
/// Timestamps serialize as RFC 3339 (an ISO-8601 profile); `last_check`
/// is `null` until the first probe has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub uptime_seconds: u64,
    pub last_check: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    /// 200 when healthy, 503 for every other status.
    pub fn http_status(&self) -> StatusCode {
        if self.status.is_healthy() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
