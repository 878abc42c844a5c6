//! Card zones: the deck and a player's draw pile and field.
//!
//! ## Key Types
//!
//! - `Deck`: validated six-card list, cloned on construction
//! - `Player`: shuffled draw pile plus a field of at most three cards
//! - `RemovalOutcome` / `DrawnCard`: what a removal and its refill did

pub mod deck;
pub mod player;

pub use deck::Deck;
pub use player::{DrawnCard, Player, RemovalOutcome};
