//! Match state.
//!
//! ## GameState
//!
//! An immutable snapshot of a two-player match:
//! - both players (draw piles and fields)
//! - whose turn it is and the turn counter (starts at 1)
//! - match status and winner
//! - the battle config and the shared RNG
//!
//! Transitions never mutate a state in place: `resolve_attack` clones the
//! snapshot and returns the successor. Players keep their zones in `im`
//! persistent vectors, so the clone is O(1) and earlier snapshots stay valid.
//!
//! ## MatchBuilder
//!
//! Builds the opening state. Player 0 is built first, then player 1, both
//! consuming the match RNG; a replay must follow the same order.

use serde::{Deserialize, Serialize};

use super::config::BattleConfig;
use super::error::{BattleError, Result};
use super::ids::{opponent_index, PlayerId};
use super::rng::GameRng;
use crate::zones::{Deck, Player};

/// Whether a match is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    InProgress,
    Finished,
}

/// Snapshot of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    players: [Player; 2],
    current_player_index: usize,
    turn: u32,
    status: MatchStatus,
    winner_id: Option<PlayerId>,
    config: BattleConfig,
    rng: GameRng,
}

/// Wire form of a `GameState`, checked before it becomes a state.
#[derive(Deserialize)]
struct GameStateRepr {
    players: [Player; 2],
    current_player_index: usize,
    turn: u32,
    status: MatchStatus,
    winner_id: Option<PlayerId>,
    config: BattleConfig,
    rng: GameRng,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = BattleError;

    fn try_from(repr: GameStateRepr) -> Result<Self> {
        if repr.current_player_index > 1 {
            return Err(BattleError::invalid_snapshot(format!(
                "seat {} does not exist",
                repr.current_player_index
            )));
        }
        if let Some(winner) = &repr.winner_id {
            if repr.players.iter().all(|p| p.id() != winner) {
                return Err(BattleError::invalid_snapshot(format!(
                    "winner {winner} is not in the match"
                )));
            }
        }
        if (repr.status == MatchStatus::Finished) != repr.winner_id.is_some() {
            return Err(BattleError::invalid_snapshot("status and winner disagree"));
        }

        Ok(Self {
            players: repr.players,
            current_player_index: repr.current_player_index,
            turn: repr.turn,
            status: repr.status,
            winner_id: repr.winner_id,
            config: repr.config,
            rng: repr.rng,
        })
    }
}

impl GameState {
    /// Opening state: player 0 to act on turn 1.
    #[must_use]
    pub fn new(players: [Player; 2], config: BattleConfig, rng: GameRng) -> Self {
        Self {
            players,
            current_player_index: 0,
            turn: 1,
            status: MatchStatus::InProgress,
            winner_id: None,
            config,
            rng,
        }
    }

    /// Set the acting seat (builder pattern). Only the low bit is used.
    #[must_use]
    pub fn with_current_player(mut self, index: usize) -> Self {
        self.current_player_index = index & 1;
        self
    }

    /// Set the turn counter (builder pattern).
    #[must_use]
    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    // === Accessors ===

    /// Both players, seat order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player in a seat (0 or 1).
    #[must_use]
    pub fn player(&self, index: usize) -> &Player {
        &self.players[index & 1]
    }

    /// Seat of the acting player.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The acting player.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_player_index)
    }

    /// The player being attacked this turn.
    #[must_use]
    pub fn opponent_player(&self) -> &Player {
        self.player(opponent_index(self.current_player_index))
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Match status.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Has the match ended?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Winner, once finished.
    #[must_use]
    pub fn winner_id(&self) -> Option<&PlayerId> {
        self.winner_id.as_ref()
    }

    /// Effect tunables for this match.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The match RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Transitions (crate-internal) ===

    /// Split borrow of one seat, the config and the RNG.
    pub(crate) fn seat_mut(&mut self, index: usize) -> (&mut Player, &BattleConfig, &mut GameRng) {
        (&mut self.players[index & 1], &self.config, &mut self.rng)
    }

    /// Hand the turn to the other seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player_index = opponent_index(self.current_player_index);
        self.turn += 1;
    }

    /// End the match.
    pub(crate) fn finish(&mut self, winner: PlayerId) {
        self.status = MatchStatus::Finished;
        self.winner_id = Some(winner);
    }
}

/// Builder for the opening `GameState`.
///
/// ## Example
///
/// ```
/// use card_clash::cards::{Card, CardClass, Rarity};
/// use card_clash::core::MatchBuilder;
/// use card_clash::zones::Deck;
///
/// let deck = |prefix: &str| {
///     let cards: Vec<Card> = (0..6)
///         .map(|i| Card::new(format!("{prefix}{i}"), "Card", CardClass::Chain, Rarity::Common, 5))
///         .collect();
///     Deck::new(&cards).unwrap()
/// };
///
/// let state = MatchBuilder::new()
///     .player("hero", deck("h"))
///     .player("villain", deck("v"))
///     .build(42)
///     .unwrap();
///
/// assert_eq!(state.turn(), 1);
/// assert_eq!(state.current_player().field().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: BattleConfig,
    players: Vec<(PlayerId, Deck)>,
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the battle config.
    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a player. Seats are assigned in call order.
    #[must_use]
    pub fn player(mut self, id: impl Into<PlayerId>, deck: Deck) -> Self {
        self.players.push((id.into(), deck));
        self
    }

    /// Build with a seeded, reproducible RNG.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::PlayerCount` unless exactly two players were added.
    pub fn build(self, seed: u64) -> Result<GameState> {
        self.build_with_rng(GameRng::seeded(seed))
    }

    /// Build with the given RNG.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::PlayerCount` unless exactly two players were added.
    pub fn build_with_rng(self, mut rng: GameRng) -> Result<GameState> {
        let count = self.players.len();
        let config = self.config;
        let players: [Player; 2] = self
            .players
            .into_iter()
            .map(|(id, deck)| Player::new(id, deck, &config, &mut rng))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| BattleError::PlayerCount(count))?;

        Ok(GameState::new(players, config, rng))
    }
}
