//! Draw detection logic.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// The engine checks for a win first, so a full board reaching this point
/// is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(2).unwrap();
        board.place(1, 1, Symbol::X);
        board.place(2, 2, Symbol::O);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2).unwrap();
        for (line, column) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            board.place(line, column, Symbol::X);
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_single_square_board() {
        let mut board = Board::new(1).unwrap();
        assert!(!is_full(&board));
        board.place(1, 1, Symbol::O);
        assert!(is_full(&board));
    }
}
