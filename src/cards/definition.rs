//! Card definitions - static catalog data.
//!
//! `CardDefinition` holds the immutable properties of a card type: its class,
//! rarity and base power. Per-match state (current power, buffs, statuses) is
//! stored separately in `Card`.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Combat class. Drives enter-field effects and synergy grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardClass {
    Attack,
    Defense,
    Support,
    Control,
    Continuous,
    Evade,
    Chain,
    Strategy,
}

impl CardClass {
    /// Every class, in declaration order.
    pub const ALL: [CardClass; 8] = [
        CardClass::Attack,
        CardClass::Defense,
        CardClass::Support,
        CardClass::Control,
        CardClass::Continuous,
        CardClass::Evade,
        CardClass::Chain,
        CardClass::Strategy,
    ];
}

/// Rarity tier, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Diamond,
}

impl Rarity {
    /// Number of tiers.
    pub const COUNT: usize = 7;

    /// Every tier, lowest first.
    pub const ALL: [Rarity; Self::COUNT] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Diamond,
    ];

    /// Zero-based tier index.
    #[must_use]
    pub const fn tier(self) -> usize {
        self as usize
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_clash::cards::{CardClass, CardDefinition, Rarity};
///
/// let def = CardDefinition::new("ember-lancer", "Ember Lancer", CardClass::Attack, Rarity::Rare, 14)
///     .with_flavor("Strikes first, asks later.");
///
/// assert_eq!(def.base_power, 14);
/// assert_eq!(def.class, CardClass::Attack);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Combat class.
    pub class: CardClass,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Power before awakening.
    pub base_power: i64,

    /// Flavor text, ignored by combat.
    #[serde(default)]
    pub flavor: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        class: CardClass,
        rarity: Rarity,
        base_power: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class,
            rarity,
            base_power,
            flavor: String::new(),
        }
    }

    /// Set flavor text (builder pattern).
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }
}
