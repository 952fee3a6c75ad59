//! Bot liveness subsystem.
//!
//! # Data Flow
//! ```text
//! GET / or GET /health
//!     → checker.rs (probe on demand)
//!     → probe.rs (log file mtime vs. freshness threshold)
//!     → state.rs (status + last check overwritten)
//!     → report.rs (JSON body, 200 or 503)
//! ```
//!
//! # Design Decisions
//! - Pull-based: no background polling task
//! - Health is inferred from log-write recency, not a direct heartbeat
//! - One state record per process, owned by the server

pub mod checker;
pub mod probe;
pub mod report;
pub mod state;

pub use checker::HealthChecker;
pub use probe::{LivenessProbe, LivenessSource, LogFileSource};
pub use report::HealthReport;
pub use state::{HealthState, HealthStatus};
