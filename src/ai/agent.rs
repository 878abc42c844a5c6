//! Move scoring and the difficulty policy.
//!
//! Scoring is a pure function of the state: every attacker on the acting
//! field is paired with every defender on the opposing field and the pairing
//! is previewed with the same power comparison the resolver uses.
//!
//! | outcome | score          |
//! |---------|----------------|
//! | win     | 100 + margin   |
//! | tie     | 40             |
//! | loss    | -margin        |
//!
//! plus `0.5 × defender power` on every move. Moves are ranked by score,
//! highest first; equal scores keep enumeration order.
//!
//! Selection then depends on the difficulty:
//! - `Hard`: the top move
//! - `Normal`: uniform among the top 3
//! - `Easy`: half the time any move at all, otherwise the top move

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::config::AiConfig;
use crate::battle::{preview_exchange, Exchange, Outcome};
use crate::core::{BattleError, CardId, GameRng, GameState, RandomSource, Result};

/// How strong the AI plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// An attacker/defender pairing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub attacker_id: CardId,
    pub defender_id: CardId,
}

impl Move {
    #[must_use]
    pub fn new(attacker_id: impl Into<CardId>, defender_id: impl Into<CardId>) -> Self {
        Self {
            attacker_id: attacker_id.into(),
            defender_id: defender_id.into(),
        }
    }
}

/// A move with its preview and score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub exchange: Exchange,
    pub score: f64,
}

/// Score of one previewed exchange.
#[must_use]
pub fn score_exchange(exchange: &Exchange, config: &AiConfig) -> f64 {
    let outcome_score = match exchange.outcome {
        Outcome::AttackerWins { margin } => config.win_base + margin as f64,
        Outcome::Tie => config.tie_score,
        Outcome::DefenderWins { margin } => -(margin as f64),
    };
    outcome_score + config.target_weight * exchange.defender_power as f64
}

/// Every legal move for the acting player, best first.
///
/// Frozen cards are not offered as attackers. Empty when either field is
/// empty or the whole acting field is frozen.
#[must_use]
pub fn score_moves(state: &GameState, config: &AiConfig) -> Vec<ScoredMove> {
    let attacking = state.current_player();
    let defending = state.opponent_player();

    let mut scored: Vec<ScoredMove> = attacking
        .field()
        .iter()
        .filter(|attacker| !attacker.status_effects.is_frozen())
        .flat_map(|attacker| {
            defending.field().iter().map(move |defender| {
                let exchange =
                    preview_exchange(attacker, attacking.field(), defender, defending.field());
                ScoredMove {
                    mv: Move::new(attacker.id.clone(), defender.id.clone()),
                    score: score_exchange(&exchange, config),
                    exchange,
                }
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Pick from ranked moves according to the difficulty.
///
/// Returns `None` only for an empty list. `Hard` consumes no randomness.
pub fn select_move<'a, R: RandomSource + ?Sized>(
    ranked: &'a [ScoredMove],
    difficulty: Difficulty,
    config: &AiConfig,
    rng: &mut R,
) -> Option<&'a ScoredMove> {
    if ranked.is_empty() {
        return None;
    }
    let index = match difficulty {
        Difficulty::Hard => 0,
        Difficulty::Normal => rng.gen_index(config.normal_top_n.clamp(1, ranked.len())),
        Difficulty::Easy => {
            if rng.chance(config.easy_random_chance) {
                rng.gen_index(ranked.len())
            } else {
                0
            }
        }
    };
    ranked.get(index)
}

/// A computer opponent.
///
/// The agent owns its RNG, so deciding never advances the match RNG.
///
/// ## Example
///
/// ```
/// use card_clash::ai::{AiAgent, Difficulty};
/// use card_clash::core::GameRng;
///
/// let agent = AiAgent::new(Difficulty::Hard, GameRng::seeded(7));
/// assert_eq!(agent.difficulty(), Difficulty::Hard);
/// ```
#[derive(Clone, Debug)]
pub struct AiAgent {
    difficulty: Difficulty,
    config: AiConfig,
    rng: GameRng,
}

impl AiAgent {
    #[must_use]
    pub fn new(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            difficulty,
            config: AiConfig::default(),
            rng,
        }
    }

    /// Set the scoring config (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: AiConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Choose an attack for the acting player.
    ///
    /// # Errors
    ///
    /// - `BattleError::MatchAlreadyFinished` if the match is over
    /// - `BattleError::NoMovesAvailable` if either field is empty or every
    ///   acting card is frozen
    pub fn decide(&mut self, state: &GameState) -> Result<Move> {
        if state.is_finished() {
            return Err(BattleError::MatchAlreadyFinished);
        }
        let ranked = score_moves(state, &self.config);
        let chosen = select_move(&ranked, self.difficulty, &self.config, &mut self.rng)
            .ok_or(BattleError::NoMovesAvailable)?;

        log::debug!(
            "{:?} AI picks {} -> {} (score {:.1}, {} candidates)",
            self.difficulty,
            chosen.mv.attacker_id,
            chosen.mv.defender_id,
            chosen.score,
            ranked.len()
        );
        Ok(chosen.mv.clone())
    }
}
