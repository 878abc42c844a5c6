//! Binary snapshots of a `GameState`.
//!
//! A snapshot carries everything, including the RNG position, so a decoded
//! state resolves further attacks exactly like the original.
//!
//! ```
//! use card_clash::cards::{Card, CardClass, Rarity};
//! use card_clash::core::{decode_state, encode_state, MatchBuilder};
//! use card_clash::zones::Deck;
//!
//! let deck = |p: &str| {
//!     let cards: Vec<Card> = (0..6)
//!         .map(|i| Card::new(format!("{p}{i}"), "Card", CardClass::Evade, Rarity::Rare, 6))
//!         .collect();
//!     Deck::new(&cards).unwrap()
//! };
//! let state = MatchBuilder::new().player("a", deck("a")).player("b", deck("b")).build(5).unwrap();
//!
//! let bytes = encode_state(&state).unwrap();
//! assert_eq!(decode_state(&bytes).unwrap(), state);
//! ```

use super::error::Result;
use super::state::GameState;

/// Encode a state with bincode.
///
/// # Errors
///
/// Returns `BattleError::Snapshot` if encoding fails.
pub fn encode_state(state: &GameState) -> Result<Vec<u8>> {
    Ok(bincode::serialize(state)?)
}

/// Decode a state written by `encode_state`.
///
/// # Errors
///
/// Returns `BattleError::Snapshot` for truncated or corrupt input.
pub fn decode_state(bytes: &[u8]) -> Result<GameState> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BattleError;

    #[test]
    fn test_corrupt_snapshot() {
        let err = decode_state(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, BattleError::Snapshot(_)));
    }
}
