//! Card system: definitions, instances, power math and catalog.
//!
//! ## Key Types
//!
//! - `CardClass` / `Rarity`: combat class and rarity tier
//! - `CardDefinition`: static catalog data
//! - `Card`: per-match mutable card state
//! - `CardCatalog`: definition lookup and the `definition -> Card` factory

pub mod card;
pub mod catalog;
pub mod definition;
pub mod power;

pub use card::Card;
pub use catalog::CardCatalog;
pub use definition::{CardClass, CardDefinition, Rarity};
pub use power::{awakening_cost, calculate_card_power, calculate_power, effective_power};
