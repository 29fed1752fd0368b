//! Core domain types for N×N tic-tac-toe.

use crate::engine::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The mark a player leaves on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    /// The conventional first mark.
    pub const X: Symbol = Symbol('X');
    /// The conventional second mark.
    pub const O: Symbol = Symbol('O');

    /// Creates a symbol from any character.
    pub const fn new(mark: char) -> Self {
        Self(mark)
    }

    /// Returns the underlying character.
    pub fn mark(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(mark: char) -> Self {
        Self(mark)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a player's mark.
    Occupied(Symbol),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// Square N×N board addressed by 1-indexed `(line, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

/// Unchecked wire form of a board.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.size)?;
        if raw.squares.len() != board.squares.len() {
            return Err(GameError::MalformedBoard {
                size: raw.size,
                squares: raw.squares.len(),
            });
        }
        board.squares = raw.squares;
        Ok(board)
    }
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// A zero size is rejected.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        let cells = size
            .checked_mul(size)
            .ok_or(GameError::InvalidBoardSize(size))?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Length of one side.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, line: usize, column: usize) -> Option<usize> {
        let in_range = |c: usize| (1..=self.size).contains(&c);
        (in_range(line) && in_range(column)).then(|| (line - 1) * self.size + (column - 1))
    }

    /// Gets the square at `(line, column)`, or `None` when off the board.
    pub fn get(&self, line: usize, column: usize) -> Option<Square> {
        self.index(line, column).map(|idx| self.squares[idx])
    }

    /// Checks if the square at `(line, column)` exists and is empty.
    pub fn is_empty_at(&self, line: usize, column: usize) -> bool {
        matches!(self.get(line, column), Some(Square::Empty))
    }

    /// Places `symbol` at `(line, column)`.
    ///
    /// Callers validate the move first; an off-board coordinate is ignored.
    pub(crate) fn place(&mut self, line: usize, column: usize, symbol: Symbol) {
        if let Some(idx) = self.index(line, column) {
            self.squares[idx] = Square::Occupied(symbol);
        }
    }

    /// Empties every square.
    pub(crate) fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Coordinates of every empty square, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(idx, _)| (idx / self.size + 1, idx % self.size + 1))
            .collect()
    }

    /// Number of squares holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(symbol))
            .count()
    }

    /// Checks if no square is empty.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col_idx, square) in row.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, " ")?;
                }
                match square {
                    Square::Empty => write!(f, "-")?,
                    Square::Occupied(symbol) => write!(f, "{symbol}")?,
                }
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with a completed line.
    Won(Symbol),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has an outcome.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }
}
