use anyhow::Result;
use bar_core::{config::Config, migration, server, telemetry};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "bar-core", version, about = "Business lookup service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Create the database if missing and apply migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let prometheus_handle = telemetry::init(&config.telemetry)?;

            info!("Starting BAR Core Service");

            server::run(config, prometheus_handle).await
        }
        Command::Migrate => {
            let mut telemetry_config = config.telemetry.clone();
            telemetry_config.metrics_enabled = false;
            telemetry_config.tracing_enabled = false;
            telemetry::init(&telemetry_config)?;

            migration::run_migrations(&config).await
        }
    }
}
