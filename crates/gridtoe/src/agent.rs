//! Move agents for players that choose their own moves.

use crate::action::Move;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// A strategy that proposes moves for a non-human player.
///
/// Agents see only the board size. A proposal may be illegal; the engine
/// discards it and asks again.
pub trait MoveAgent: std::fmt::Debug + Send {
    /// Proposes a move for a `board_size`×`board_size` board.
    fn propose(&mut self, board_size: usize) -> Move;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

/// Agent that picks line and column uniformly from `1..=size`.
///
/// Occupied squares are not avoided.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Creates an agent seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates an agent with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveAgent for RandomAgent {
    #[instrument(skip(self))]
    fn propose(&mut self, board_size: usize) -> Move {
        let max = i32::try_from(board_size.max(1)).unwrap_or(i32::MAX);
        let line = self.rng.gen_range(1..=max);
        let column = self.rng.gen_range(1..=max);
        debug!(line, column, "Random agent proposed move");
        Move::new(line, column)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposals_stay_on_board() {
        let mut agent = RandomAgent::seeded(7);
        for _ in 0..500 {
            let mv = agent.propose(4);
            assert!((1..=4).contains(&mv.line));
            assert!((1..=4).contains(&mv.column));
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut a = RandomAgent::seeded(42);
        let mut b = RandomAgent::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.propose(5), b.propose(5));
        }
    }

    #[test]
    fn test_covers_every_square() {
        let mut agent = RandomAgent::seeded(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(agent.propose(3));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_single_square_board() {
        let mut agent = RandomAgent::seeded(3);
        assert_eq!(agent.propose(1), Move::new(1, 1));
    }
}
