//! Cognito CLI - Turn free-form notes into structured document outlines.

use clap::Parser;
use cognito_cli::commands;
use cognito_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Picks up OPENAI_API_KEY and RUST_LOG from a local .env when present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> cognito_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Explicit config file, else ~/.cognito/config.toml, else defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Outline(args) => {
            commands::execute_outline(args, &config, &formatter).await?;
        }
        Command::Analyze(args) => {
            commands::execute_analyze(args, &formatter).await?;
        }
    }

    Ok(())
}
