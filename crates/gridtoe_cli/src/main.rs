//! Gridtoe - terminal front end
//!
//! Plays N×N tic-tac-toe against a random opponent on stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe_cli::{Cli, GameConfig, Table, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    info!(?config, "Starting gridtoe");

    let mut table = Table::new(config).context("Failed to start game")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut table, stdin.lock(), stdout.lock(), cli.json)
}
