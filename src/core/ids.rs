//! Identifiers for cards, players and field sides.
//!
//! Cards and players are identified by strings supplied by the catalog and
//! the driver. Both ids are cheap newtypes so they cannot be mixed up.
//!
//! ```
//! use card_clash::core::{CardId, PlayerId};
//!
//! let card = CardId::new("ember-lancer");
//! let player = PlayerId::from("hero");
//!
//! assert_eq!(card.as_str(), "ember-lancer");
//! assert_eq!(player.to_string(), "hero");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a card instance.
///
/// Within one deck every card id is distinct; see `Deck::new`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a player (human or AI).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which field a card selection was expected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The acting player's field.
    Attacker,
    /// The opponent's field.
    Defender,
    /// Either field.
    Either,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attacker => f.write_str("attacking"),
            Side::Defender => f.write_str("defending"),
            Side::Either => f.write_str("any"),
        }
    }
}

/// Index of the other seat in a two-player match.
#[must_use]
pub const fn opponent_index(index: usize) -> usize {
    1 - (index & 1)
}
