//! Card instances - per-match card state.
//!
//! A `Card` is created from a `CardDefinition` and carries everything that
//! changes during a match: current power, accumulated buffs, the auxiliary
//! `hp` pool and status effects. `Clone` is a deep copy, so a card that
//! enters a deck never aliases the caller's copy.

use serde::{Deserialize, Serialize};

use super::definition::{CardClass, CardDefinition, Rarity};
use super::power::calculate_power;
use crate::core::{CardId, RarityConfig};
use crate::effects::StatusEffects;

/// A card in play.
///
/// `base_power` and `awakening` are private: base power never changes and
/// awakening is only raised through `awaken`, which enforces the rarity cap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within its deck.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Combat class.
    pub class: CardClass,

    /// Rarity tier.
    pub rarity: Rarity,

    base_power: i64,

    awakening: u8,

    /// Current combat power. Never negative.
    pub power: i64,

    /// Fractional bonus from triggered effects.
    pub buff_power_pct_total: f64,

    /// Auxiliary pool raised by SUPPORT heals.
    pub hp: i64,

    /// Shields, freezes and damage-over-time stacks.
    #[serde(default)]
    pub status_effects: StatusEffects,
}

impl Card {
    /// Create a level-0 card.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        class: CardClass,
        rarity: Rarity,
        base_power: i64,
    ) -> Self {
        let base_power = base_power.max(0);
        Self {
            id: id.into(),
            name: name.into(),
            class,
            rarity,
            base_power,
            awakening: 0,
            power: base_power,
            buff_power_pct_total: 0.0,
            hp: base_power,
            status_effects: StatusEffects::default(),
        }
    }

    /// Instantiate a definition.
    #[must_use]
    pub fn from_definition(def: &CardDefinition) -> Self {
        Self::new(
            def.id.clone(),
            def.name.clone(),
            def.class,
            def.rarity,
            def.base_power,
        )
    }

    /// Set the awakening level (builder pattern), clamped to the rarity cap.
    ///
    /// Recomputes `power` and `hp` from the base power.
    #[must_use]
    pub fn with_awakening(mut self, level: u8, rarity: &RarityConfig) -> Self {
        self.awakening = level.min(rarity.max_awakening(self.rarity));
        self.power = calculate_power(self.base_power, self.awakening);
        self.hp = self.power;
        self
    }

    /// Power before awakening.
    #[must_use]
    pub fn base_power(&self) -> i64 {
        self.base_power
    }

    /// Current awakening level.
    #[must_use]
    pub fn awakening(&self) -> u8 {
        self.awakening
    }

    /// Can this card be awakened further?
    #[must_use]
    pub fn can_awaken(&self, rarity: &RarityConfig) -> bool {
        self.awakening < rarity.max_awakening(self.rarity)
    }

    /// Raise awakening by one level, growing power by one 10% step.
    ///
    /// Returns `false` (and changes nothing) at the rarity cap.
    pub fn awaken(&mut self, rarity: &RarityConfig) -> bool {
        if !self.can_awaken(rarity) {
            return false;
        }
        self.awakening += 1;
        self.power = calculate_power(self.base_power, self.awakening);
        true
    }

    /// Reduce power, clamping at zero. Returns the power left.
    pub fn take_damage(&mut self, amount: i64) -> i64 {
        self.power = (self.power - amount).max(0);
        self.power
    }
}
