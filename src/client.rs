//! Client for a running health server.
//!
//! # Responsibilities
//! - Fetch the JSON report from `/` or `/health`
//! - Poll until the bot is healthy, never past the caller's deadline
//!
//! # Design Decisions
//! - Every request carries a timeout, capped at the time left before the deadline
//! - Sleeps between attempts are cut short by the deadline

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{self, Instant};

/// Errors from talking to the health server.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bot not healthy within {0:?}")]
    Deadline(Duration),
}

/// One answer from the health server.
#[derive(Debug, Clone)]
pub struct FetchedReport {
    pub status: StatusCode,
    pub body: Value,
}

impl FetchedReport {
    /// The server answers 200 only when the bot is healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// HTTP client bound to one health server.
pub struct HealthClient {
    http: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
}

impl HealthClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ClientError> {
        // The server is addressed directly; environment proxies would only get in the way.
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .no_proxy()
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
        })
    }

    /// GET `path` and decode the JSON report.
    pub async fn fetch(&self, path: &str) -> Result<FetchedReport, ClientError> {
        self.fetch_within(path, self.request_timeout).await
    }

    async fn fetch_within(&self, path: &str, limit: Duration) -> Result<FetchedReport, ClientError> {
        let res = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .timeout(limit)
            .send()
            .await?;
        let status = res.status();
        let body = res.json::<Value>().await?;
        Ok(FetchedReport { status, body })
    }

    /// Poll `/health` every `interval` until it reports healthy or
    /// `timeout` elapses. `on_attempt` sees every attempt's outcome.
    pub async fn wait_until_healthy<F>(
        &self,
        timeout: Duration,
        interval: Duration,
        mut on_attempt: F,
    ) -> Result<FetchedReport, ClientError>
    where
        F: FnMut(&Result<FetchedReport, ClientError>),
    {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(ClientError::Deadline(timeout));
            }

            let attempt = self
                .fetch_within("/health", remaining.min(self.request_timeout))
                .await;
            on_attempt(&attempt);
            if let Ok(report) = attempt {
                if report.is_healthy() {
                    return Ok(report);
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            time::sleep(interval.min(remaining)).await;
        }
    }
}
