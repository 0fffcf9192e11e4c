use std::process::ExitCode;

use clap::Parser;
use deal_votes::cli::Cli;
use deal_votes::config::LogFormat;
use deal_votes::{AppError, Config};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("deal_votes=info,deal_votes_pipeline=info"));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    info!(
        service_name = "deal-votes",
        service_version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );
}

/// Main entry point for the Deal Votes client.
///
/// Loads `.env`, sets up logging, and runs the requested command. A failed vote
/// prints the user-facing notification and exits with status 1.
#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(LogFormat::from_env());
    let config = Config::from_env();

    match cli.run(&config).await {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(AppError::Vote(e)) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
