//! Preconditions a move must satisfy before the engine applies it.
//!
//! Each check is a named unit so that rejections can be logged with the
//! exact rule that failed. `LegalMove` composes them in evaluation order.

use crate::action::{Move, MoveError};
use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Precondition: the game has no outcome yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` once a winner or draw is recorded.
    pub fn check(status: GameStatus) -> Result<(), MoveError> {
        if status.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates are strictly positive.
pub struct PositiveCoordinates;

impl PositiveCoordinates {
    /// Fails with `NonPositive` for a zero or negative coordinate.
    pub fn check(mv: &Move) -> Result<(usize, usize), MoveError> {
        mv.cell().ok_or(MoveError::NonPositive(*mv))
    }
}

/// Precondition: the move lands on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Fails with `OutOfBounds` when either coordinate exceeds the size.
    pub fn check(mv: &Move, cell: (usize, usize), board: &Board) -> Result<(), MoveError> {
        let (line, column) = cell;
        if line > board.size() || column > board.size() {
            Err(MoveError::OutOfBounds {
                mv: *mv,
                size: board.size(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` when a mark is already there.
    pub fn check(mv: &Move, cell: (usize, usize), board: &Board) -> Result<(), MoveError> {
        if board.is_empty_at(cell.0, cell.1) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(*mv))
        }
    }
}

/// Composite precondition for applying a move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the board cell on success.
    #[instrument(skip(board))]
    pub fn check(
        board: &Board,
        status: GameStatus,
        mv: &Move,
    ) -> Result<(usize, usize), MoveError> {
        GameNotOver::check(status)?;
        let cell = PositiveCoordinates::check(mv)?;
        WithinBounds::check(mv, cell, board)?;
        CellIsEmpty::check(mv, cell, board)?;
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    fn board() -> Board {
        let mut board = Board::new(3).unwrap();
        board.place(2, 2, Symbol::X);
        board
    }

    #[test]
    fn test_legal_move_returns_cell() {
        let result = LegalMove::check(&board(), GameStatus::InProgress, &Move::new(3, 1));
        assert_eq!(result, Ok((3, 1)));
    }

    #[test]
    fn test_game_over_checked_first() {
        let result = LegalMove::check(&board(), GameStatus::Draw, &Move::new(0, 9));
        assert_eq!(result, Err(MoveError::GameOver));
    }

    #[test]
    fn test_non_positive_rejected() {
        let mv = Move::new(0, 2);
        let result = LegalMove::check(&board(), GameStatus::InProgress, &mv);
        assert_eq!(result, Err(MoveError::NonPositive(mv)));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mv = Move::new(2, 4);
        let result = LegalMove::check(&board(), GameStatus::InProgress, &mv);
        assert_eq!(result, Err(MoveError::OutOfBounds { mv, size: 3 }));
    }

    #[test]
    fn test_occupied_rejected() {
        let mv = Move::new(2, 2);
        let result = LegalMove::check(&board(), GameStatus::InProgress, &mv);
        assert_eq!(result, Err(MoveError::CellOccupied(mv)));
    }
}
