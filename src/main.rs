//! Bot health check server.
//!
//! ```text
//!   uptime monitor ──GET / or /health──▶ HealthServer ──▶ HealthChecker
//!                                                           │
//!                                          bot.log mtime ◀──┘
//!                                                           │
//!   200 {"status":"healthy",...}  ◀─────────────────────────┘
//!   503 {"status":"stale"|"no_logs"|"error",...}
//! ```
//!
//! Runs on a single-threaded runtime: the server task and the idle loop
//! share one event loop, and each probe runs to completion inside its
//! request.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use bot_health::lifecycle::{idle, signals, startup, Shutdown};
use bot_health::HealthServer;

#[derive(Parser)]
#[command(name = "bot-health")]
#[command(about = "HTTP health check for the Telegram bot", long_about = None)]
struct Args {
    /// Optional TOML config file; built-in defaults otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = startup::bootstrap(args.config.as_deref())?;

    let listener = startup::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HealthServer::new(&config);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    idle::idle_until(
        Duration::from_secs(config.lifecycle.idle_wake_secs),
        signals::wait_for_signal(),
    )
    .await;

    tracing::info!("Shutting down health check server");
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
