//! Keep-alive server for uptime monitors.
//!
//! Deployed separately from `bot-health`; pinging it keeps the hosting
//! platform from suspending the repl.

use clap::Parser;
use std::path::PathBuf;

use bot_health::lifecycle::{signals, startup, Shutdown};
use bot_health::KeepAliveServer;

#[derive(Parser)]
#[command(name = "keep-alive")]
#[command(about = "Answers uptime monitor pings", long_about = None)]
struct Args {
    /// Optional TOML config file; built-in defaults otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = startup::bootstrap(args.config.as_deref())?;

    let listener = startup::bind(&config.keep_alive.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = KeepAliveServer::new(&config.keep_alive);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::wait_for_signal().await;
    tracing::info!("Shutting down keep alive server");
    shutdown.trigger();
    server_task.await??;

    Ok(())
}
