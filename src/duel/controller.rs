//! Who picks the attacks for a seat.

use std::collections::VecDeque;

use crate::ai::{AiAgent, Move};
use crate::core::{BattleError, GameState, Result};

/// Chooses the attack for the acting player.
pub trait Controller {
    /// Pick an attacker on the acting field and a defender on the opposing one.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::NoMovesAvailable` when no move can be produced.
    fn choose(&mut self, state: &GameState) -> Result<Move>;
}

impl Controller for AiAgent {
    fn choose(&mut self, state: &GameState) -> Result<Move> {
        self.decide(state)
    }
}

/// Plays a fixed list of moves, then the leftmost unfrozen card against the
/// leftmost defender.
///
/// Scripted moves are returned as given, even if stale; the resolver
/// rejects those.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    script: VecDeque<Move>,
}

impl ScriptedController {
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: moves.into_iter().collect(),
        }
    }

    /// Moves left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Controller for ScriptedController {
    fn choose(&mut self, state: &GameState) -> Result<Move> {
        if let Some(mv) = self.script.pop_front() {
            return Ok(mv);
        }
        let attacker = state
            .current_player()
            .field()
            .iter()
            .find(|card| !card.status_effects.is_frozen());
        let defender = state.opponent_player().field().front();
        match (attacker, defender) {
            (Some(attacker), Some(defender)) => {
                Ok(Move::new(attacker.id.clone(), defender.id.clone()))
            }
            _ => Err(BattleError::NoMovesAvailable),
        }
    }
}
