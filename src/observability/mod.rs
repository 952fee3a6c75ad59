//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (probe outcomes, response codes)
//!
//! Consumers:
//!     → Operators reading stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Pretty format for development, JSON for log shippers
//! - Metrics are opt-in; without a recorder the macros are no-ops

pub mod logging;
pub mod metrics;
