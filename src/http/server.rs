//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the health handlers
//! - Wire up middleware (tracing, request ID)
//! - Serve on a listener until the shutdown broadcast fires

use axum::{body::Body, extract::State, http::Request, routing::get, Router};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::HealthConfig;
use crate::health::{HealthChecker, HealthReport};
use crate::http::request::{request_span, MakeRequestUuid};
use crate::lifecycle::shutdown;
use crate::observability::metrics;

/// Errors that stop a server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<HealthChecker>,
}

/// HTTP server answering "is the bot alive".
pub struct HealthServer {
    router: Router,
    checker: Arc<HealthChecker>,
}

impl HealthServer {
    /// Create a server probing the log file named in `config`.
    pub fn new(config: &HealthConfig) -> Self {
        Self::with_checker(Arc::new(HealthChecker::from_config(&config.probe)))
    }

    /// Create a server around an existing checker.
    pub fn with_checker(checker: Arc<HealthChecker>) -> Self {
        let state = AppState {
            checker: checker.clone(),
        };
        Self {
            router: build_router(state),
            checker,
        }
    }

    /// The router, for serving elsewhere or for tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn checker(&self) -> &Arc<HealthChecker> {
        &self.checker
    }

    /// Run the server until `shutdown_rx` fires, then release the listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Health check server started");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("Health check server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| request_span(request)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Probe and report. Query string and body are ignored.
async fn health_handler(State(state): State<AppState>) -> HealthReport {
    let report = state.checker.check();
    metrics::record_response(report.http_status().as_u16());

    tracing::debug!(
        status = %report.status,
        uptime_seconds = report.uptime_seconds,
        "Health check served"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeConfig;
    use crate::health::probe::tests::FailingSource;
    use crate::health::LivenessProbe;
    use crate::http::X_REQUEST_ID;
    use axum::http::StatusCode;
    use chrono::DateTime;
    use serde_json::Value;
    use std::fs::File;
    use std::path::Path;
    use std::time::{Duration, SystemTime};
    use tower::ServiceExt;

    fn server_for(path: &Path) -> HealthServer {
        let config = HealthConfig {
            probe: ProbeConfig {
                log_path: path.display().to_string(),
                freshness_secs: 300,
            },
            ..HealthConfig::default()
        };
        HealthServer::new(&config)
    }

    fn touch(path: &Path, age: Duration) {
        File::create(path)
            .unwrap()
            .set_modified(SystemTime::now() - age)
            .unwrap();
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_log_is_503_no_logs() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_for(&dir.path().join("bot.log"));

        let (status, body) = get(server.router(), "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "no_logs");
    }

    #[tokio::test]
    async fn test_fresh_log_is_200_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        touch(&path, Duration::from_secs(10));

        let (status, body) = get(server_for(&path).router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_old_log_is_503_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        touch(&path, Duration::from_secs(400));

        let (status, body) = get(server_for(&path).router(), "/").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "stale");
    }

    #[tokio::test]
    async fn test_metadata_failure_is_503_error() {
        let checker = HealthChecker::new(LivenessProbe::new(
            Box::new(FailingSource),
            Duration::from_secs(300),
        ));
        let server = HealthServer::with_checker(Arc::new(checker));

        let (status, body) = get(server.router(), "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_both_routes_share_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");
        touch(&path, Duration::ZERO);
        let server = server_for(&path);

        let (root_status, root) = get(server.router(), "/").await;
        let (health_status, health) = get(server.router(), "/health?verbose=1").await;
        assert_eq!(root_status, health_status);
        assert_eq!(root["status"], health["status"]);

        let first = DateTime::parse_from_rfc3339(root["last_check"].as_str().unwrap()).unwrap();
        let second =
            DateTime::parse_from_rfc3339(health["last_check"].as_str().unwrap()).unwrap();
        assert!(second >= first);
        assert!(health["uptime_seconds"].as_u64() >= root["uptime_seconds"].as_u64());
    }

    #[tokio::test]
    async fn test_body_has_exactly_four_keys() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_for(&dir.path().join("bot.log"));

        let (_, body) = get(server.router(), "/").await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(object["status"].is_string());
        assert!(object["uptime_seconds"].is_u64());
        assert!(object["last_check"].is_string());
        assert!(object["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_response_is_json_with_request_id() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_for(&dir.path().join("bot.log"));

        let response = server
            .router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert!(response.headers().contains_key(X_REQUEST_ID));

        let response = server
            .router()
            .oneshot(
                Request::get("/health")
                    .header(X_REQUEST_ID, "monitor-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], "monitor-42");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_for(&dir.path().join("bot.log"));

        let response = server
            .router()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(server.checker().snapshot().last_check().is_none());
    }
}
