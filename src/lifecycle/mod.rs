//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Init logging/metrics → Bind listener
//!
//! Idle (idle.rs):
//!     Periodic no-op wake until a stop signal arrives
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → stop idling
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → servers stop accepting → listener released → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No restart supervision; the host platform owns that

pub mod idle;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
