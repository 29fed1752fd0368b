//! Players: a symbol plus who decides its moves.

use crate::action::Move;
use crate::agent::MoveAgent;
use crate::types::Symbol;

/// Who supplies a player's moves.
#[derive(Debug)]
pub enum Controller {
    /// Moves arrive from outside through `submit_move`.
    Human,
    /// Moves are proposed by an agent.
    Agent(Box<dyn MoveAgent>),
}

/// One of the two participants in a game.
#[derive(Debug)]
pub struct Player {
    symbol: Symbol,
    controller: Controller,
}

impl Player {
    /// Creates a human-driven player.
    pub fn human(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            controller: Controller::Human,
        }
    }

    /// Creates an agent-driven player.
    pub fn agent(symbol: impl Into<Symbol>, agent: impl MoveAgent + 'static) -> Self {
        Self {
            symbol: symbol.into(),
            controller: Controller::Agent(Box::new(agent)),
        }
    }

    /// Returns the player's mark.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns who controls this player.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns true if moves come from outside the engine.
    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    /// Asks the agent for a move, paired with the agent's name.
    /// Human players propose nothing.
    pub(crate) fn propose(&mut self, board_size: usize) -> Option<(&str, Move)> {
        match &mut self.controller {
            Controller::Human => None,
            Controller::Agent(agent) => {
                let mv = agent.propose(board_size);
                Some((agent.name(), mv))
            }
        }
    }
}
