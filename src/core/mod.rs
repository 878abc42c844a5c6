//! Core battle types: ids, RNG, errors, configuration, state and snapshots.
//!
//! Everything here is independent of individual card effects; the other
//! modules build on these types.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::{BattleConfig, RarityConfig, DECK_SIZE, FIELD_CAPACITY};
pub use error::{BattleError, Result};
pub use ids::{opponent_index, CardId, PlayerId, Side};
pub use rng::{EntropyRng, GameRng, GameRngState, LcgRng, RandomSource};
pub use snapshot::{decode_state, encode_state};
pub use state::{GameState, MatchBuilder, MatchStatus};
