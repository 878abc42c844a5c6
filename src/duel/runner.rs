//! Driver loop: play a match to completion.
//!
//! Each turn runs round upkeep for the acting player, asks that seat's
//! controller for a move and resolves it. A player whose whole field is
//! frozen passes instead. The loop stops when the match finishes or the turn
//! cap is hit.

use serde::{Deserialize, Serialize};

use super::controller::Controller;
use crate::battle::{pass_turn, resolve_attack_with_log, start_round, CombatEvent};
use crate::core::{BattleError, GameState, PlayerId, Result};

/// Duel loop settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Maximum turns to play before giving up (guards against stalls).
    pub max_turns: u32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self { max_turns: 200 }
    }
}

impl DuelConfig {
    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// What a duel produced.
#[derive(Clone, Debug, PartialEq)]
pub struct DuelReport {
    /// State after the last resolved attack.
    pub final_state: GameState,
    /// Every event, upkeep and attacks, in order.
    pub events: Vec<CombatEvent>,
    /// Turns taken, attacks and passes.
    pub turns_played: u32,
}

impl DuelReport {
    /// Winner, if the match finished.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.final_state.winner_id()
    }

    /// Did the match reach a result within the turn cap?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.final_state.is_finished()
    }
}

/// Runs matches between two controllers.
#[derive(Clone, Debug, Default)]
pub struct Duel {
    config: DuelConfig,
}

impl Duel {
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    /// Play `state` out. `controllers[i]` chooses for seat `i`.
    ///
    /// # Errors
    ///
    /// Propagates controller and resolver errors. `NoMovesAvailable` is
    /// logged at error level first, since the end-of-match check should make
    /// it unreachable.
    pub fn run(
        &self,
        mut state: GameState,
        mut controllers: [&mut dyn Controller; 2],
    ) -> Result<DuelReport> {
        let mut events = Vec::new();
        let mut turns_played = 0;

        while !state.is_finished() && turns_played < self.config.max_turns {
            let (upkept, upkeep_events) = start_round(&state)?;
            events.extend(upkeep_events);

            if !upkept.current_player().can_attack() {
                let (next, pass_events) = pass_turn(&upkept)?;
                events.extend(pass_events);
                state = next;
                turns_played += 1;
                continue;
            }

            let seat = upkept.current_player_index();
            let mv = match controllers[seat].choose(&upkept) {
                Ok(mv) => mv,
                Err(err @ BattleError::NoMovesAvailable) => {
                    log::error!(
                        "turn {}: {} has no moves on an unfinished match",
                        upkept.turn(),
                        upkept.current_player().id()
                    );
                    return Err(err);
                }
                Err(err) => return Err(err),
            };

            let (next, attack_events) =
                resolve_attack_with_log(&upkept, &mv.attacker_id, &mv.defender_id)?;
            events.extend(attack_events);
            state = next;
            turns_played += 1;
        }

        if !state.is_finished() {
            log::warn!("duel stopped at the {} turn cap", self.config.max_turns);
        }

        Ok(DuelReport {
            final_state: state,
            events,
            turns_played,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiAgent, Difficulty};
    use crate::cards::{Card, CardClass, Rarity};
    use crate::core::{GameRng, MatchBuilder};
    use crate::duel::ScriptedController;
    use crate::zones::Deck;

    fn deck(prefix: &str, power: i64) -> Deck {
        let cards: Vec<Card> = (0..6)
            .map(|i| {
                Card::new(format!("{prefix}{i}"), "Card", CardClass::Chain, Rarity::Common, power + i)
            })
            .collect();
        Deck::new(&cards).unwrap()
    }

    fn state(seed: u64) -> GameState {
        MatchBuilder::new()
            .player("a", deck("a", 4))
            .player("b", deck("b", 4))
            .build(seed)
            .unwrap()
    }

    #[test]
    fn test_ai_duel_finishes() {
        let mut a = AiAgent::new(Difficulty::Hard, GameRng::seeded(1));
        let mut b = AiAgent::new(Difficulty::Normal, GameRng::seeded(2));
        let report = Duel::default().run(state(3), [&mut a, &mut b]).unwrap();

        assert!(report.is_finished());
        assert!(report.winner().is_some());
        assert_eq!(report.final_state.turn(), report.turns_played + 1);
    }

    #[test]
    fn test_turn_cap() {
        let mut a = ScriptedController::default();
        let mut b = ScriptedController::default();
        let report = Duel::new(DuelConfig::default().with_max_turns(1))
            .run(state(3), [&mut a, &mut b])
            .unwrap();

        assert_eq!(report.turns_played, 1);
    }

    #[test]
    fn test_bad_script_surfaces_error() {
        let mut a = ScriptedController::new([crate::ai::Move::new("nope", "b0")]);
        let mut b = ScriptedController::default();
        let err = Duel::default().run(state(3), [&mut a, &mut b]).unwrap_err();
        assert!(matches!(err, BattleError::InvalidCardSelection { .. }));
    }
}
