use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;

use bot_health::client::{ClientError, FetchedReport};
use bot_health::HealthClient;

#[derive(Parser)]
#[command(name = "health-cli")]
#[command(about = "Query a running bot health server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Give up on a single request after this many seconds
    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the report from `/`
    Status,
    /// Fetch the report from `/health`
    Health,
    /// Poll `/health` until the bot is healthy or the deadline passes
    Wait {
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        #[arg(long, default_value_t = 2)]
        interval_secs: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = HealthClient::new(&cli.url, Duration::from_secs(cli.request_timeout_secs))?;

    let healthy = match cli.command {
        Commands::Status => print_report(&client.fetch("/").await?)?,
        Commands::Health => print_report(&client.fetch("/health").await?)?,
        Commands::Wait {
            timeout_secs,
            interval_secs,
        } => {
            let result = client
                .wait_until_healthy(
                    Duration::from_secs(timeout_secs),
                    Duration::from_secs(interval_secs),
                    print_attempt,
                )
                .await;
            match result {
                Ok(_) => true,
                Err(e) => {
                    eprintln!("Gave up: {}", e);
                    false
                }
            }
        }
    };

    Ok(if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_attempt(attempt: &Result<FetchedReport, ClientError>) {
    match attempt {
        Ok(report) => {
            let _ = print_report(report);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Print the report and return whether the bot is healthy.
fn print_report(report: &FetchedReport) -> Result<bool, serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(&report.body)?);
    if !report.is_healthy() {
        eprintln!("Health server returned status {}", report.status);
    }
    Ok(report.is_healthy())
}
