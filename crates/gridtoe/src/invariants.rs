//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that hold after every applied move.
//! The engine checks them in debug builds; they are also testable on their
//! own.

use crate::engine::TicTacToe;
use crate::types::GameStatus;

/// A property of engine state that every applied move preserves.
pub trait Invariant<S> {
    /// Returns true while the property is satisfied.
    fn holds(state: &S) -> bool;

    /// What the property promises, used in violation reports.
    fn description() -> &'static str;
}

/// A broken invariant, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub struct InvariantViolation(&'static str);

impl InvariantViolation {
    /// Reports the invariant described by `description` as broken.
    pub fn new(description: &'static str) -> Self {
        Self(description)
    }

    /// The broken invariant's description.
    pub fn description(&self) -> &'static str {
        self.0
    }
}

/// Invariants evaluated as a group.
pub trait InvariantSet<S> {
    /// Evaluates every member; `Err` lists each one that failed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter_map(|(ok, description)| (!ok).then_some(description.into()))
        .collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Invariant: the first player has as many marks as the second, or one more.
pub struct BalancedMarks;

impl Invariant<TicTacToe> for BalancedMarks {
    fn holds(game: &TicTacToe) -> bool {
        let [first, second] = game.players();
        let board = game.board();
        let a = board.count(first.symbol());
        let b = board.count(second.symbol());
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "First player's marks equal the second's or exceed them by one"
    }
}

/// Invariant: the recorded status agrees with the board.
///
/// An in-progress game has an empty square, a draw has none, and a winner
/// is one of the two players.
pub struct StatusMatchesBoard;

impl Invariant<TicTacToe> for StatusMatchesBoard {
    fn holds(game: &TicTacToe) -> bool {
        match game.status() {
            GameStatus::InProgress => !game.board().is_full(),
            GameStatus::Draw => game.board().is_full(),
            GameStatus::Won(symbol) => game.players().iter().any(|p| p.symbol() == symbol),
        }
    }

    fn description() -> &'static str {
        "Game status is consistent with the board"
    }
}

/// All engine invariants.
pub type EngineInvariants = (BalancedMarks, StatusMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::player::Player;
    use crate::types::Symbol;

    fn game() -> TicTacToe {
        TicTacToe::new(3, Player::human(Symbol::X), Player::human(Symbol::O)).unwrap()
    }

    #[test]
    fn test_fresh_game_holds() {
        assert_eq!(EngineInvariants::check_all(&game()), Ok(()));
    }

    #[test]
    fn test_holds_through_play() {
        let mut game = game();
        for (l, c) in [(1, 1), (2, 2), (1, 2), (2, 1), (1, 3)] {
            game.submit_move(Move::new(l, c));
            assert!(BalancedMarks::holds(&game));
            assert!(StatusMatchesBoard::holds(&game));
        }
        assert_eq!(game.status(), GameStatus::Won(Symbol::X));
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new(BalancedMarks::description());
        assert_eq!(violation.to_string(), BalancedMarks::description());
        assert_eq!(violation.description(), BalancedMarks::description());
    }

    struct AlwaysBroken;

    impl Invariant<TicTacToe> for AlwaysBroken {
        fn holds(_: &TicTacToe) -> bool {
            false
        }

        fn description() -> &'static str {
            "never holds"
        }
    }

    #[test]
    fn test_check_all_reports_only_failures() {
        let violations = <(AlwaysBroken, BalancedMarks)>::check_all(&game()).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("never holds")]);
    }
}
