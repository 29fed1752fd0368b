//! Game configuration loaded from TOML and command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Length of one side of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Symbol of the human player, who moves first.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Symbol of the random opponent.
    #[serde(default = "default_agent_symbol")]
    agent_symbol: char,

    /// Fixed seed for the opponent; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_board_size() -> usize {
    3
}

fn default_human_symbol() -> char {
    'X'
}

fn default_agent_symbol() -> char {
    'O'
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            human_symbol: default_human_symbol(),
            agent_symbol: default_agent_symbol(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading game configuration");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::new(format!("Failed to parse {}: {}", path.display(), e)))?;

        debug!(?config, "Configuration loaded");
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration: file (if any), then flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(size) = cli.size {
            config.board_size = size;
        }
        if let Some(symbol) = cli.human {
            config.human_symbol = symbol;
        }
        if let Some(symbol) = cli.agent {
            config.agent_symbol = symbol;
        }
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(&self, board_size: usize) -> Self {
        Self {
            board_size,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1"));
        }
        if self.human_symbol == self.agent_symbol {
            return Err(ConfigError::new(format!(
                "human_symbol and agent_symbol are both '{}'",
                self.human_symbol
            )));
        }
        Ok(())
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("board_size = 5").unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(*config.human_symbol(), 'X');
        assert_eq!(*config.agent_symbol(), 'O');
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli {
            size: Some(4),
            seed: Some(3),
            agent: Some('Z'),
            ..Cli::default()
        };
        let config = GameConfig::resolve(&cli).unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.agent_symbol(), 'Z');
    }

    #[test]
    fn test_zero_size_rejected() {
        let cli = Cli {
            size: Some(0),
            ..Cli::default()
        };
        let err = GameConfig::resolve(&cli).unwrap_err();
        assert!(err.message.contains("board_size"));
    }

    #[test]
    fn test_same_symbols_rejected() {
        let cli = Cli {
            human: Some('O'),
            ..Cli::default()
        };
        assert!(GameConfig::resolve(&cli).is_err());
    }

    #[test]
    fn test_with_board_size_keeps_symbols() {
        let config = GameConfig::default().with_board_size(7);
        assert_eq!(*config.board_size(), 7);
        assert_eq!(*config.human_symbol(), 'X');
    }
}
