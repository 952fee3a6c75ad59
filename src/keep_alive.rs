//! Keep-alive server.
//!
//! Answers uptime-monitor pings so the hosting platform keeps the
//! deployment awake. It shares nothing with the health server: separate
//! binary, separate listener, separate runtime.

use axum::{extract::State, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::KeepAliveConfig;
use crate::http::ServerError;
use crate::lifecycle::shutdown;
use crate::observability::metrics;

/// Plain-text "I'm alive" server.
pub struct KeepAliveServer {
    router: Router,
}

impl KeepAliveServer {
    pub fn new(config: &KeepAliveConfig) -> Self {
        let message: Arc<str> = Arc::from(config.message.as_str());
        let router = Router::new()
            .route("/", get(ping_handler))
            .route("/health", get(ping_handler))
            .with_state(message)
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Keep alive server started");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("Keep alive server stopped");
        Ok(())
    }
}

async fn ping_handler(State(message): State<Arc<str>>) -> String {
    metrics::record_keep_alive();
    message.to_string()
}
