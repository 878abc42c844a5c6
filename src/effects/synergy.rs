//! Field synergy: same-class cards fight harder together.
//!
//! Two cards of a class on one field give that class +1 attack, three give +2.
//! Classes with fewer than two cards get no entry, which reads as +0.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardClass};

/// Bonus granted to every card of one class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynergyBonus {
    pub attack_modifier: i64,
}

/// Per-class bonuses for one field.
pub type SynergyMap = FxHashMap<CardClass, SynergyBonus>;

/// Compute the bonuses for the cards on one field.
pub fn synergy_bonuses<'a>(field: impl IntoIterator<Item = &'a Card>) -> SynergyMap {
    let mut counts: FxHashMap<CardClass, usize> = FxHashMap::default();
    for card in field {
        *counts.entry(card.class).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter_map(|(class, count)| {
            let attack_modifier = match count {
                0 | 1 => return None,
                2 => 1,
                _ => 2,
            };
            Some((class, SynergyBonus { attack_modifier }))
        })
        .collect()
}

/// Bonus for a class, 0 when the class has no entry.
#[must_use]
pub fn attack_bonus(bonuses: &SynergyMap, class: CardClass) -> i64 {
    bonuses.get(&class).map_or(0, |bonus| bonus.attack_modifier)
}
