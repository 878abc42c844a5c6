//! Tower progression: enemy decks and rewards keyed by floor number.
//!
//! The tower sits outside combat. It only builds `Deck`s from the catalog and
//! tells the caller what a cleared floor pays; storing coins and chests is
//! the caller's business.

pub mod enemy;
pub mod rewards;

pub use enemy::{allowed_rarities, enemy_awakening, enemy_deck, highest_rarity};
pub use rewards::{floor_reward, FloorReward};
