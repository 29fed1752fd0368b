//! Gridtoe - tic-tac-toe on an arbitrary N×N board.
//!
//! This crate holds the game logic only: board state, turn order, move
//! legality, and win/draw detection, plus a random-move opponent.
//! Rendering and input belong to whatever front end drives the engine.
//!
//! # Architecture
//!
//! - **Types**: symbols, squares, the board, and game status
//! - **Action**: 1-indexed moves and rejection reasons
//! - **Contracts**: named preconditions a move must satisfy
//! - **Rules**: pure win and draw checks
//! - **Agent**: strategies that propose moves for non-human players
//! - **Engine**: the authoritative session, mutated only by `submit_move`
//!
//! # Example
//!
//! ```
//! use gridtoe::{GameStatus, Move, Player, Symbol, TicTacToe};
//!
//! # fn example() -> Result<(), gridtoe::GameError> {
//! let mut game = TicTacToe::new(3, Player::human(Symbol::X), Player::human(Symbol::O))?;
//! game.submit_move(Move::new(2, 2));
//! assert_eq!(game.current_player().symbol(), Symbol::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod agent;
mod contracts;
mod engine;
mod invariants;
mod player;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use agent::{MoveAgent, RandomAgent};
pub use contracts::{CellIsEmpty, GameNotOver, LegalMove, PositiveCoordinates, WithinBounds};
pub use engine::{GameError, GameSnapshot, TicTacToe};
pub use invariants::{BalancedMarks, EngineInvariants, Invariant, InvariantSet, InvariantViolation, StatusMatchesBoard};
pub use player::{Controller, Player};
pub use rules::{Line, achieved_victory, is_full};
pub use types::{Board, GameStatus, Square, Symbol};
