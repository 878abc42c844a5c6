//! Power math: awakening growth, buffs and awakening cost.
//!
//! Awakening compounds 10% per level and rounds after every step, so the
//! result depends on intermediate rounding: base 5 at level 2 is
//! `round(round(5 × 1.1) × 1.1) = round(6 × 1.1) = 7`, not `round(5 × 1.21) = 6`.

use super::card::Card;

/// Growth factor per awakening level.
pub const AWAKENING_GROWTH: f64 = 1.1;

/// Combat power for a base power at an awakening level.
#[must_use]
pub fn calculate_power(base_power: i64, awakening: u8) -> i64 {
    (0..awakening).fold(base_power, |power, _| {
        (power as f64 * AWAKENING_GROWTH).round() as i64
    })
}

/// Power derived from a card's base power and awakening.
#[must_use]
pub fn calculate_card_power(card: &Card) -> i64 {
    calculate_power(card.base_power(), card.awakening())
}

/// Power after triggered buffs: `round(power × (1 + buff))`.
#[must_use]
pub fn effective_power(card: &Card) -> i64 {
    (card.power as f64 * (1.0 + card.buff_power_pct_total)).round() as i64
}

/// Duplicates needed for the next awakening.
#[must_use]
pub fn awakening_cost(card: &Card) -> u32 {
    u32::from(card.awakening()).max(1)
}
