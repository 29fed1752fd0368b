//! Move requests and the reasons a move can be turned down.
//!
//! A move is just a candidate `(line, column)` pair. It carries no player:
//! the engine stamps it with whoever's turn it is.

use serde::{Deserialize, Serialize};

/// A candidate move at 1-indexed `(line, column)`.
///
/// Coordinates are signed so that anything a front end or agent hands over
/// can be represented and then rejected by the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({line}, {column})")]
pub struct Move {
    /// Row, counted from 1 at the top.
    pub line: i32,
    /// Column, counted from 1 at the left.
    pub column: i32,
}

impl Move {
    /// Creates a new move.
    pub fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }

    /// Returns true if both coordinates are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.line > 0 && self.column > 0
    }

    /// Returns the coordinates as board indices when both are positive.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let line = usize::try_from(self.line).ok().filter(|&l| l > 0)?;
        let column = usize::try_from(self.column).ok().filter(|&c| c > 0)?;
        Some((line, column))
    }
}

/// Why a move was not applied.
///
/// The engine never returns this from `submit_move`; it is logged and the
/// move is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// A coordinate is zero or negative.
    #[display("Move {_0} has a non-positive coordinate")]
    NonPositive(#[error(not(source))] Move),

    /// A coordinate is past the edge of the board.
    #[display("Move {mv} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The rejected move.
        mv: Move,
        /// Side length of the board.
        size: usize,
    },

    /// The target square already holds a mark.
    #[display("Square {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Move),

    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(Move::new(1, 1).is_valid());
        assert!(!Move::new(0, 1).is_valid());
        assert!(!Move::new(1, -2).is_valid());
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(Move::new(2, 3).cell(), Some((2, 3)));
        assert_eq!(Move::new(-1, 3).cell(), None);
        assert_eq!(Move::new(2, 0).cell(), None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn test_error_display() {
        let err = MoveError::OutOfBounds {
            mv: Move::new(4, 1),
            size: 3,
        };
        assert_eq!(err.to_string(), "Move (4, 1) is outside the 3x3 board");
        assert_eq!(
            MoveError::CellOccupied(Move::new(1, 2)).to_string(),
            "Square (1, 2) is already occupied"
        );
    }
}
