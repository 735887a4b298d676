//! Strictly SOS - terminal front end
//!
//! Reads moves from standard input, forwards them to the engine and prints
//! each outcome.

#![warn(missing_docs)]

mod cli;
mod render;
mod session;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use session::Session;
use settings::Settings;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli);

    let config = load_config(&cli)?;
    info!(size = %config.size(), mode = %config.mode(), "Configuration resolved");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config).run(stdin.lock(), stdout.lock())
}

/// Logs go to stderr so they never mix with the game transcript.
fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<strictly_sos::GameConfig> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    Ok(settings.with_overrides(cli).game_config()?)
}
