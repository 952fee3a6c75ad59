//! Shared utilities for integration testing.

use std::fs::File;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::task::JoinHandle;

use bot_health::config::{HealthConfig, ProbeConfig};
use bot_health::http::ServerError;
use bot_health::lifecycle::startup;
use bot_health::{HealthChecker, HealthServer, KeepAliveServer, Shutdown};

/// Create (or truncate) `path` and backdate its mtime by `age`.
pub fn touch(path: &Path, age: Duration) {
    File::create(path)
        .unwrap()
        .set_modified(SystemTime::now() - age)
        .unwrap();
}

/// Health server config probing `log_path`.
pub fn config_for(log_path: &Path) -> HealthConfig {
    HealthConfig {
        probe: ProbeConfig {
            log_path: log_path.display().to_string(),
            freshness_secs: 300,
        },
        ..HealthConfig::default()
    }
}

/// A health server running on an ephemeral loopback port.
pub struct RunningHealthServer {
    pub addr: SocketAddr,
    pub checker: Arc<HealthChecker>,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

/// Start a health server on an ephemeral loopback port.
pub async fn start_health_server(config: &HealthConfig, shutdown: &Shutdown) -> RunningHealthServer {
    let listener = startup::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HealthServer::new(config);
    let checker = server.checker().clone();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));
    RunningHealthServer {
        addr,
        checker,
        handle,
    }
}

/// Start a keep-alive server on an ephemeral loopback port.
#[allow(dead_code)]
pub async fn start_keep_alive_server(
    config: &HealthConfig,
    shutdown: &Shutdown,
) -> (SocketAddr, JoinHandle<Result<(), ServerError>>) {
    let listener = startup::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = KeepAliveServer::new(&config.keep_alive);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));
    (addr, handle)
}

/// Client that never pools, so shutdown is not held up by idle connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
