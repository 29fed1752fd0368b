//! Command-line interface for the gridtoe terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Gridtoe - N×N tic-tac-toe against a random opponent
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gridtoe")]
#[command(about = "Play N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Symbol for the human player, who moves first
    #[arg(long)]
    pub human: Option<char>,

    /// Symbol for the random opponent
    #[arg(long)]
    pub agent: Option<char>,

    /// Seed for the opponent, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the game state as JSON after every command
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gridtoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.size.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "gridtoe", "--size", "5", "--human", "A", "--agent", "B", "--seed", "9", "--json",
        ])
        .unwrap();
        assert_eq!(cli.size, Some(5));
        assert_eq!(cli.human, Some('A'));
        assert_eq!(cli.agent, Some('B'));
        assert_eq!(cli.seed, Some(9));
        assert!(cli.json);
    }

    #[test]
    fn test_bad_size_rejected() {
        assert!(Cli::try_parse_from(["gridtoe", "--size", "big"]).is_err());
    }
}
