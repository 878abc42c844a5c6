//! Battle configuration.
//!
//! Structural limits (deck size, field capacity) are fixed constants. Effect
//! tunables live in `BattleConfig`, which can be built in code or loaded from
//! JSON; missing keys fall back to the defaults.
//!
//! ```
//! use card_clash::core::BattleConfig;
//!
//! let config = BattleConfig::from_json(r#"{ "proc_chance": 0.5 }"#).unwrap();
//! assert_eq!(config.proc_chance, 0.5);
//! assert_eq!(config.attack_buff_pct, 0.25);
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::cards::Rarity;

/// Exact number of cards in a deck.
pub const DECK_SIZE: usize = 6;

/// Maximum number of cards on a field.
pub const FIELD_CAPACITY: usize = 3;

/// Per-rarity limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityConfig {
    /// Max awakening level, indexed by `Rarity::tier()`.
    pub max_awakening: [u8; Rarity::COUNT],

    /// Lowest rarity allowed to roll proc effects.
    pub proc_min_rarity: Rarity,
}

impl RarityConfig {
    /// Max awakening level for a rarity.
    #[must_use]
    pub fn max_awakening(&self, rarity: Rarity) -> u8 {
        self.max_awakening[rarity.tier()]
    }

    /// Can cards of this rarity roll procs?
    #[must_use]
    pub fn can_proc(&self, rarity: Rarity) -> bool {
        rarity >= self.proc_min_rarity
    }
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            max_awakening: [2, 3, 4, 5, 6, 8, 10],
            proc_min_rarity: Rarity::Epic,
        }
    }
}

/// Tunables for enter-field effects and procs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Permanent buff an ATTACK card gives itself on entering.
    pub attack_buff_pct: f64,

    /// Buff a STRATEGY card gives every card on the field.
    pub strategy_buff_pct: f64,

    /// Allies shielded by a DEFENSE card.
    pub shield_targets: usize,

    /// Allies healed by a SUPPORT card.
    pub heal_targets: usize,

    /// Heal as a fraction of the ally's base power.
    pub heal_pct: f64,

    /// Heal when the SUPPORT proc fires.
    pub proc_heal_pct: f64,

    /// Chance for an eligible card's proc.
    pub proc_chance: f64,

    /// Rarity limits.
    pub rarity: RarityConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            attack_buff_pct: 0.25,
            strategy_buff_pct: 0.20,
            shield_targets: 2,
            heal_targets: 2,
            heal_pct: 0.15,
            proc_heal_pct: 0.35,
            proc_chance: 0.05,
            rarity: RarityConfig::default(),
        }
    }
}

impl BattleConfig {
    /// Create the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing keys take default values.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::Catalog` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the proc chance.
    #[must_use]
    pub fn with_proc_chance(mut self, chance: f64) -> Self {
        self.proc_chance = chance;
        self
    }

    /// Set the ATTACK self-buff.
    #[must_use]
    pub fn with_attack_buff(mut self, pct: f64) -> Self {
        self.attack_buff_pct = pct;
        self
    }

    /// Set the STRATEGY field buff.
    #[must_use]
    pub fn with_strategy_buff(mut self, pct: f64) -> Self {
        self.strategy_buff_pct = pct;
        self
    }

    /// Set the SUPPORT heal fractions (normal, proc).
    #[must_use]
    pub fn with_heal(mut self, pct: f64, proc_pct: f64) -> Self {
        self.heal_pct = pct;
        self.proc_heal_pct = proc_pct;
        self
    }

    /// Set the rarity limits.
    #[must_use]
    pub fn with_rarity(mut self, rarity: RarityConfig) -> Self {
        self.rarity = rarity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.attack_buff_pct, 0.25);
        assert_eq!(config.strategy_buff_pct, 0.20);
        assert_eq!(config.shield_targets, 2);
        assert_eq!(config.proc_chance, 0.05);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BattleConfig::new()
            .with_proc_chance(1.0)
            .with_attack_buff(0.5)
            .with_heal(0.1, 0.2);

        assert_eq!(config.proc_chance, 1.0);
        assert_eq!(config.attack_buff_pct, 0.5);
        assert_eq!(config.heal_pct, 0.1);
        assert_eq!(config.proc_heal_pct, 0.2);
    }

    #[test]
    fn test_rarity_limits() {
        let rarity = RarityConfig::default();
        assert_eq!(rarity.max_awakening(Rarity::Common), 2);
        assert_eq!(rarity.max_awakening(Rarity::Diamond), 10);

        assert!(!rarity.can_proc(Rarity::Rare));
        assert!(rarity.can_proc(Rarity::Epic));
        assert!(rarity.can_proc(Rarity::Legendary));
        assert!(rarity.can_proc(Rarity::Mythic));
        assert!(rarity.can_proc(Rarity::Diamond));
    }

    #[test]
    fn test_partial_json() {
        let config = BattleConfig::from_json(r#"{ "heal_pct": 0.5 }"#).unwrap();
        assert_eq!(config.heal_pct, 0.5);
        assert_eq!(config.rarity, RarityConfig::default());
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default().with_proc_chance(0.3);
        let json = serde_json::to_string(&config).unwrap();
        let back = BattleConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }
}
