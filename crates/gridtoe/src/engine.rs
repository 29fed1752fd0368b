//! The game engine: one authoritative session per instance.
//!
//! All mutation goes through [`TicTacToe::submit_move`]. Illegal moves and
//! moves after the game ended are dropped without an error; the reason is
//! only logged.

use crate::action::Move;
use crate::contracts::LegalMove;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::player::Player;
use crate::rules::{achieved_victory, is_full};
use crate::types::{Board, GameStatus, Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};

/// Error constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The board must be at least 1×1.
    #[display("Board size must be at least 1, got {_0}")]
    InvalidBoardSize(#[error(not(source))] usize),

    /// Both players were given the same mark.
    #[display("Both players use the symbol {_0}")]
    DuplicateSymbol(#[error(not(source))] Symbol),

    /// A stored board whose square count does not match its size.
    #[display("{size}x{size} board needs {} squares, got {squares}", size * size)]
    MalformedBoard {
        /// Declared side length.
        size: usize,
        /// Number of squares present.
        squares: usize,
    },
}

/// Tic-tac-toe on an N×N board between two players.
#[derive(Debug)]
pub struct TicTacToe {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next.
    current: usize,
    status: GameStatus,
}

impl TicTacToe {
    /// Creates a game with an empty `board_size`×`board_size` board.
    ///
    /// `player_a` moves first. The two players must use different symbols.
    #[instrument(skip(player_a, player_b), fields(a = %player_a.symbol(), b = %player_b.symbol()))]
    pub fn new(board_size: usize, player_a: Player, player_b: Player) -> Result<Self, GameError> {
        if player_a.symbol() == player_b.symbol() {
            warn!(symbol = %player_a.symbol(), "Refusing game with identical symbols");
            return Err(GameError::DuplicateSymbol(player_a.symbol()));
        }
        let board = Board::new(board_size)?;
        info!(board_size, "New game");
        Ok(Self {
            board,
            players: [player_a, player_b],
            current: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Clears the board and outcome; the first player moves next.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = 0;
        self.status = GameStatus::InProgress;
        info!("Game reset");
    }

    /// Submits a move for the player whose turn it is.
    ///
    /// The move is applied only if the game is in progress, both coordinates
    /// are in `1..=size`, and the square is empty. Otherwise nothing changes.
    /// The supplied move is ignored when an agent is to move.
    ///
    /// After the move, agent-driven players keep proposing moves until a
    /// human is to move or the game is over. An agent whose proposal is
    /// rejected is asked again.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn submit_move(&mut self, mv: Move) {
        if self.current_player().is_human() {
            self.process(mv);
        } else {
            debug!(%mv, "Agent to move, submitted move ignored");
        }

        let mut attempts: u64 = 0;
        while !self.status.is_over() {
            let size = self.board.size();
            let agent = &mut self.players[self.current];
            let Some((name, proposal)) = agent.propose(size) else {
                break;
            };
            attempts += 1;
            trace!(agent = name, attempts, %proposal, "Agent attempt");
            if self.process(proposal) {
                attempts = 0;
            }
        }
    }

    /// Validates and applies one move. Returns true if it was applied.
    fn process(&mut self, mv: Move) -> bool {
        let (line, column) = match LegalMove::check(&self.board, self.status, &mv) {
            Ok(cell) => cell,
            Err(error) => {
                debug!(%mv, %error, "Move rejected");
                return false;
            }
        };

        let symbol = self.current_player().symbol();
        self.board.place(line, column, symbol);
        debug!(%mv, %symbol, "Move applied");

        if achieved_victory(&self.board, (line, column), symbol) {
            self.status = GameStatus::Won(symbol);
            info!(%symbol, "Game won");
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current = 1 - self.current;
        }

        self.check_invariants();
        true
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                error!(%violation, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Invariant violations: {violations:?}");
        }
    }

    /// Status line for display: the outcome, or whose turn it is.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Draw => "draw".to_string(),
            GameStatus::Won(symbol) => format!("{symbol} won"),
            GameStatus::InProgress => format!("it is {}'s turn", self.current_player().symbol()),
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this stays on the player who made the last move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Length of one side of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Captures the current state in a serializable form.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            rows: self
                .board
                .rows()
                .map(|row| row.iter().map(|sq| sq.symbol()).collect())
                .collect(),
            current: self.current_player().symbol(),
            status: self.status,
            status_text: self.status_text(),
        }
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        if let GameStatus::Won(symbol) = self.status {
            write!(f, " winner: {symbol}")?;
        }
        Ok(())
    }
}

/// Point-in-time view of a game, for rendering or logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Length of one side of the board.
    pub size: usize,
    /// Rows top to bottom; `None` marks an empty square.
    pub rows: Vec<Vec<Option<Symbol>>>,
    /// Mark of the player whose turn it is.
    pub current: Symbol,
    /// Game status.
    pub status: GameStatus,
    /// Same text as [`TicTacToe::status_text`].
    pub status_text: String,
}

impl GameSnapshot {
    /// Returns the square at 1-indexed `(line, column)`.
    pub fn square(&self, line: usize, column: usize) -> Option<Square> {
        let row = self.rows.get(line.checked_sub(1)?)?;
        let cell = row.get(column.checked_sub(1)?)?;
        Some(cell.map_or(Square::Empty, Square::Occupied))
    }
}
