//! # card-clash
//!
//! A deterministic engine for a turn-based card battler.
//!
//! Two players each field up to three cards drawn from a six-card deck. An
//! attack pits one card against one opposing card: the stronger survives
//! with the margin as its new power, the weaker is destroyed, and equal
//! powers destroy both. Destroyed cards are replaced from the draw pile; a
//! player whose field empties has lost.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `resolve_attack` takes `&GameState` and returns a
//!    new state. Zones are `im` persistent vectors, so the copy is O(1) and
//!    older snapshots stay valid.
//!
//! 2. **Deterministic**: every shuffle and proc roll comes from the RNG
//!    carried in the state. Same seed and same moves, same match.
//!
//! 3. **Configuration over constants**: effect strengths, proc chances,
//!    rarity caps and AI weights live in serde-loadable config structs.
//!
//! ## Modules
//!
//! - `core`: ids, RNG, errors, config, `GameState`, snapshots
//! - `cards`: classes, rarities, definitions, card instances, catalog
//! - `zones`: `Deck` and `Player` (draw pile and field)
//! - `effects`: enter-field triggers, synergy, status effects
//! - `battle`: attack resolution, round upkeep, combat log
//! - `ai`: move scoring and difficulty policy
//! - `tower`: enemy decks and rewards by floor
//! - `duel`: driver loop for whole matches
//!
//! ## Example
//!
//! ```
//! use card_clash::{resolve_attack, Card, CardClass, Deck, MatchBuilder, Rarity};
//!
//! let deck = |prefix: &str| {
//!     let cards: Vec<Card> = (0..6)
//!         .map(|i| Card::new(format!("{prefix}{i}"), "Card", CardClass::Chain, Rarity::Common, 5 + i))
//!         .collect();
//!     Deck::new(&cards).unwrap()
//! };
//!
//! let state = MatchBuilder::new()
//!     .player("hero", deck("h"))
//!     .player("rival", deck("r"))
//!     .build(42)
//!     .unwrap();
//!
//! let attacker = state.current_player().field()[0].id.clone();
//! let defender = state.opponent_player().field()[0].id.clone();
//! let next = resolve_attack(&state, &attacker, &defender).unwrap();
//!
//! assert_eq!(next.turn(), 2);
//! assert_eq!(state.turn(), 1);
//! ```

pub mod ai;
pub mod battle;
pub mod cards;
pub mod core;
pub mod duel;
pub mod effects;
pub mod tower;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    decode_state, encode_state, BattleConfig, BattleError, CardId, GameRng, GameRngState,
    GameState, LcgRng, MatchBuilder, MatchStatus, PlayerId, RandomSource, RarityConfig, Result,
    Side, DECK_SIZE, FIELD_CAPACITY,
};

pub use crate::cards::{Card, CardCatalog, CardClass, CardDefinition, Rarity};

pub use crate::zones::{Deck, Player};

pub use crate::effects::{ShieldKind, StatusEffect, StatusEffects, SynergyBonus};

pub use crate::battle::{
    apply_status, pass_turn, resolve_attack, resolve_attack_with_log, start_round, CombatEvent,
};

pub use crate::ai::{AiAgent, AiConfig, Difficulty, Move};

pub use crate::tower::{enemy_deck, floor_reward, FloorReward};

pub use crate::duel::{Controller, Duel, DuelConfig, DuelReport, ScriptedController};
