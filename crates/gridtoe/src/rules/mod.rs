//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from board storage
//! so the engine and the debug invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, achieved_victory};
