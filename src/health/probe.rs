//! Log-recency liveness probe.
//!
//! # Responsibilities
//! - Read the modification time of the bot's log file
//! - Classify it against the freshness threshold
//! - Absorb metadata failures into `HealthStatus::Error`
//!
//! # Design Decisions
//! - The signal is indirect: a bot that is alive but has written nothing
//!   for longer than the threshold reads as stale
//! - The signal source sits behind a trait so other artifacts can be probed

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::config::ProbeConfig;
use crate::health::state::HealthStatus;

/// Something whose modification time says whether the bot is alive.
pub trait LivenessSource: Send + Sync {
    /// Last modification time, or `None` when the artifact does not exist.
    fn last_modified(&self) -> io::Result<Option<SystemTime>>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// The log file the bot appends to while it works.
#[derive(Debug, Clone)]
pub struct LogFileSource {
    path: PathBuf,
}

impl LogFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LivenessSource for LogFileSource {
    fn last_modified(&self) -> io::Result<Option<SystemTime>> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.modified().map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Classifies a liveness source against a freshness threshold.
pub struct LivenessProbe {
    source: Box<dyn LivenessSource>,
    freshness: Duration,
}

impl LivenessProbe {
    pub fn new(source: Box<dyn LivenessSource>, freshness: Duration) -> Self {
        Self { source, freshness }
    }

    /// Probe the configured log file.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(
            Box::new(LogFileSource::new(&config.log_path)),
            Duration::from_secs(config.freshness_secs),
        )
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Evaluate the source as of `now`. Never fails.
    pub fn evaluate(&self, now: SystemTime) -> HealthStatus {
        match self.source.last_modified() {
            Ok(None) => HealthStatus::NoLogs,
            Ok(Some(modified)) => {
                // An mtime in the future (clock skew) counts as just written.
                let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
                if age < self.freshness {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Stale
                }
            }
            Err(e) => {
                tracing::error!(
                    source = %self.source.describe(),
                    error = %e,
                    "Health check failed"
                );
                HealthStatus::Error
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs::File;

    /// Source whose metadata read always fails.
    pub(crate) struct FailingSource;

    impl LivenessSource for FailingSource {
        fn last_modified(&self) -> io::Result<Option<SystemTime>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn touch(path: &Path, age: Duration) {
        let file = File::create(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    fn probe_for(path: &Path) -> LivenessProbe {
        LivenessProbe::new(Box::new(LogFileSource::new(path)), Duration::from_secs(300))
    }

    #[test]
    fn test_missing_log_is_no_logs() {
        let dir = tempfile::tempdir().unwrap();
        let probe = probe_for(&dir.path().join("bot.log"));
        assert_eq!(probe.evaluate(SystemTime::now()), HealthStatus::NoLogs);
    }

    #[test]
    fn test_recent_log_is_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        touch(&path, Duration::from_secs(10));
        assert_eq!(probe_for(&path).evaluate(SystemTime::now()), HealthStatus::Healthy);
    }

    #[test]
    fn test_old_log_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        touch(&path, Duration::from_secs(400));
        assert_eq!(probe_for(&path).evaluate(SystemTime::now()), HealthStatus::Stale);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        let modified = SystemTime::now() - Duration::from_secs(1000);
        File::create(&path).unwrap().set_modified(modified).unwrap();

        let probe = probe_for(&path);
        let fresh = probe.evaluate(modified + Duration::from_secs(299));
        let at_threshold = probe.evaluate(modified + Duration::from_secs(300));
        assert_eq!(fresh, HealthStatus::Healthy);
        assert_eq!(at_threshold, HealthStatus::Stale);
    }

    #[test]
    fn test_idle_bot_reads_as_stale() {
        // A running bot that has logged nothing for six minutes is
        // indistinguishable from a dead one.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        touch(&path, Duration::from_secs(360));
        assert_eq!(probe_for(&path).evaluate(SystemTime::now()), HealthStatus::Stale);
    }

    #[test]
    fn test_future_mtime_is_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        let now = SystemTime::now();
        File::create(&path)
            .unwrap()
            .set_modified(now + Duration::from_secs(60))
            .unwrap();
        assert_eq!(probe_for(&path).evaluate(now), HealthStatus::Healthy);
    }

    #[test]
    fn test_metadata_failure_is_error() {
        let probe = LivenessProbe::new(Box::new(FailingSource), Duration::from_secs(300));
        assert_eq!(probe.evaluate(SystemTime::now()), HealthStatus::Error);
    }

    #[test]
    fn test_from_config() {
        let config = ProbeConfig {
            log_path: "does-not-exist.log".into(),
            freshness_secs: 42,
        };
        let probe = LivenessProbe::from_config(&config);
        assert_eq!(probe.freshness(), Duration::from_secs(42));
        assert_eq!(probe.evaluate(SystemTime::now()), HealthStatus::NoLogs);
    }
}
