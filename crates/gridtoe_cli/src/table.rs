//! The front end's game session: one human against a random opponent.
//!
//! A `Table` relays input to the engine and re-reads the board and status
//! after every call. Changing the board size builds a fresh engine.

use crate::config::GameConfig;
use gridtoe::{Board, GameError, Move, Player, RandomAgent, Square, TicTacToe};
use serde::Serialize;
use tracing::{info, instrument};

/// Rendered state shown to the player after each command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Board drawn with coordinates.
    pub board: String,
    /// Status line from the engine.
    pub status: String,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.board, self.status)
    }
}

/// A game in progress at the terminal.
#[derive(Debug)]
pub struct Table {
    game: TicTacToe,
    config: GameConfig,
}

impl Table {
    /// Creates a table from configuration.
    #[instrument(skip(config), fields(board_size = config.board_size()))]
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let game = Self::build(&config)?;
        Ok(Self { game, config })
    }

    fn build(config: &GameConfig) -> Result<TicTacToe, GameError> {
        let agent = match config.seed() {
            Some(seed) => RandomAgent::seeded(*seed),
            None => RandomAgent::new(),
        };
        TicTacToe::new(
            *config.board_size(),
            Player::human(*config.human_symbol()),
            Player::agent(*config.agent_symbol(), agent),
        )
    }

    /// Submits a move, letting the opponent reply, and returns the new view.
    #[instrument(skip(self))]
    pub fn play(&mut self, line: i32, column: i32) -> View {
        self.game.submit_move(Move::new(line, column));
        self.view()
    }

    /// Starts over on the same board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> View {
        self.game.reset();
        self.view()
    }

    /// Replaces the game with a new one on a `size`×`size` board.
    ///
    /// On error the current game is kept.
    #[instrument(skip(self))]
    pub fn resize(&mut self, size: usize) -> Result<View, GameError> {
        let config = self.config.with_board_size(size);
        self.game = Self::build(&config)?;
        self.config = config;
        info!(size, "Board resized");
        Ok(self.view())
    }

    /// Re-reads the board and status from the engine.
    pub fn view(&self) -> View {
        View {
            board: render(self.game.board()),
            status: self.game.status_text(),
        }
    }

    /// Serializes the engine's snapshot as JSON.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.game.snapshot())
    }

    /// Returns the engine.
    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Draws the board with 1-indexed line and column labels.
pub fn render(board: &Board) -> String {
    let size = board.size();
    let width = size.to_string().len();
    let mut out = format!("{:width$} ", "");
    let header: Vec<String> = (1..=size).map(|c| format!("{c:>width$}")).collect();
    out.push_str(&header.join(" "));

    for (idx, row) in board.rows().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>width$} ", idx + 1));
        let cells: Vec<String> = row
            .iter()
            .map(|sq| match sq {
                Square::Empty => format!("{:>width$}", "."),
                Square::Occupied(symbol) => format!("{symbol:>width$}"),
            })
            .collect();
        out.push_str(&cells.join(" "));
    }
    out
}
