//! Rewards for clearing a tower floor.

use serde::{Deserialize, Serialize};

use super::enemy::highest_rarity;
use crate::cards::Rarity;

/// Coins granted on every floor before the per-floor bonus.
pub const BASE_COINS: u32 = 20;

/// Extra coins per floor number.
pub const COINS_PER_FLOOR: u32 = 5;

/// A chest drops on every floor divisible by this.
pub const CHEST_INTERVAL: u32 = 5;

/// What clearing a floor pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorReward {
    pub floor: u32,
    pub coins: u32,
    /// Minimum rarity of the chest, on chest floors.
    pub chest: Option<Rarity>,
}

/// Reward for clearing `floor`.
///
/// ```
/// use card_clash::cards::Rarity;
/// use card_clash::tower::floor_reward;
///
/// let reward = floor_reward(10);
/// assert_eq!(reward.coins, 70);
/// assert_eq!(reward.chest, Some(Rarity::Epic));
///
/// assert_eq!(floor_reward(7).chest, None);
/// ```
#[must_use]
pub fn floor_reward(floor: u32) -> FloorReward {
    let chest = (floor > 0 && floor % CHEST_INTERVAL == 0).then(|| highest_rarity(floor));
    FloorReward {
        floor,
        coins: BASE_COINS.saturating_add(COINS_PER_FLOOR.saturating_mul(floor)),
        chest,
    }
}
