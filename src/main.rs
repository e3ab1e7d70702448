//! Noughts - play tic-tac-toe against the computer.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{AppConfig, logging, simulate, tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command();

    match command {
        Command::Play { delay_ms } => {
            let config = AppConfig::load_or_default(&cli.config)
                .context("Failed to load configuration")?
                .with_overrides(delay_ms, cli.seed);
            logging::init_file(config.log_file())?;
            tui::run_tui(&config).await
        }
        Command::Simulate { games } => {
            logging::init_stderr()?;
            let config = AppConfig::load_or_default(&cli.config)
                .context("Failed to load configuration")?
                .with_overrides(None, cli.seed);
            info!(games, seed = ?config.seed(), "Running simulation");
            let tally = simulate::run_seeded(games, *config.seed());
            println!("{tally}");
            Ok(())
        }
    }
}
