//! Win detection logic.
//!
//! A win is a complete row, column, or diagonal of the board size. After a
//! move at `(line, column)` four lines are examined: the move's row, the
//! move's column, the main diagonal, and the anti-diagonal. Both diagonals
//! are examined whatever the move's position; an off-diagonal move can only
//! complete one if it was already complete.

use crate::types::{Board, Square, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the four lines examined after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// The row containing the move.
    Row,
    /// The column containing the move.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    /// The 1-indexed cells of this line for a move at `cell` on a
    /// `size`×`size` board.
    pub fn cells(self, cell: (usize, usize), size: usize) -> impl Iterator<Item = (usize, usize)> {
        let (line, column) = cell;
        (1..=size).map(move |i| match self {
            Line::Row => (line, i),
            Line::Column => (i, column),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (size - i + 1, i),
        })
    }

    /// Checks if every cell of this line holds `symbol`.
    pub fn is_complete(self, board: &Board, cell: (usize, usize), symbol: Symbol) -> bool {
        self.cells(cell, board.size())
            .all(|(l, c)| board.get(l, c) == Some(Square::Occupied(symbol)))
    }
}

/// Checks if the move at `cell` completed a line for `symbol`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn achieved_victory(board: &Board, cell: (usize, usize), symbol: Symbol) -> bool {
    Line::iter().any(|line| line.is_complete(board, cell, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, cells: &[(usize, usize)], symbol: Symbol) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(l, c) in cells {
            board.place(l, c, symbol);
        }
        board
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new(3).unwrap();
        assert!(!achieved_victory(&board, (2, 2), Symbol::X));
    }

    #[test]
    fn test_row_win() {
        let board = board_with(4, &[(3, 1), (3, 2), (3, 3), (3, 4)], Symbol::O);
        assert!(achieved_victory(&board, (3, 2), Symbol::O));
        assert!(!achieved_victory(&board, (3, 2), Symbol::X));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(3, &[(1, 3), (2, 3), (3, 3)], Symbol::X);
        assert!(achieved_victory(&board, (1, 3), Symbol::X));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(3, &[(1, 1), (2, 2), (3, 3)], Symbol::X);
        assert!(achieved_victory(&board, (3, 3), Symbol::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(3, &[(3, 1), (2, 2), (1, 3)], Symbol::O);
        assert!(achieved_victory(&board, (1, 3), Symbol::O));
    }

    #[test]
    fn test_diagonals_checked_for_off_diagonal_move() {
        // The diagonal is complete; the examined move sits elsewhere.
        let mut board = board_with(3, &[(1, 1), (2, 2), (3, 3)], Symbol::X);
        board.place(1, 2, Symbol::X);
        assert!(achieved_victory(&board, (1, 2), Symbol::X));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_with(3, &[(1, 1), (1, 2)], Symbol::X);
        assert!(!achieved_victory(&board, (1, 2), Symbol::X));
    }

    #[test]
    fn test_line_cells() {
        let anti: Vec<_> = Line::AntiDiagonal.cells((1, 1), 3).collect();
        assert_eq!(anti, vec![(3, 1), (2, 2), (1, 3)]);
        let row: Vec<_> = Line::Row.cells((2, 1), 2).collect();
        assert_eq!(row, vec![(2, 1), (2, 2)]);
        assert_eq!(Line::iter().count(), 4);
    }

    #[test]
    fn test_one_by_one_board() {
        let board = board_with(1, &[(1, 1)], Symbol::X);
        assert!(achieved_victory(&board, (1, 1), Symbol::X));
    }
}
