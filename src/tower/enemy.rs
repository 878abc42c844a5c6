//! Enemy decks for tower floors.
//!
//! Higher floors unlock rarer cards:
//!
//! | floors | rarities                   |
//! |--------|----------------------------|
//! | 1-4    | Common, Uncommon           |
//! | 5-9    | + Rare                     |
//! | 10-19  | + Epic                     |
//! | 20-29  | + Legendary                |
//! | 30-39  | + Mythic                   |
//! | 40+    | + Diamond                  |
//!
//! Enemies are also awakened one level per ten floors, capped per rarity.
//! Floor 0 is treated as floor 1.

use crate::cards::{Card, CardCatalog, CardDefinition, Rarity};
use crate::core::{RandomSource, RarityConfig, Result, DECK_SIZE};
use crate::zones::Deck;

/// Rarest tier an enemy may field on `floor`.
#[must_use]
pub fn highest_rarity(floor: u32) -> Rarity {
    match floor {
        0..=4 => Rarity::Uncommon,
        5..=9 => Rarity::Rare,
        10..=19 => Rarity::Epic,
        20..=29 => Rarity::Legendary,
        30..=39 => Rarity::Mythic,
        _ => Rarity::Diamond,
    }
}

/// Every rarity allowed on `floor`, commonest first.
#[must_use]
pub fn allowed_rarities(floor: u32) -> Vec<Rarity> {
    let highest = highest_rarity(floor);
    Rarity::ALL.into_iter().filter(|&r| r <= highest).collect()
}

/// Awakening level of enemy cards before the rarity cap.
#[must_use]
pub fn enemy_awakening(floor: u32) -> u8 {
    u8::try_from((floor.max(1) - 1) / 10).unwrap_or(u8::MAX)
}

/// Build an enemy deck of six distinct catalog cards for `floor`.
///
/// Cards are sampled from the rarities the floor allows. If fewer than six
/// definitions qualify, the whole catalog is sampled instead.
///
/// # Errors
///
/// Returns `BattleError::InvalidDeck` if the catalog itself holds fewer than
/// six definitions.
pub fn enemy_deck<R: RandomSource + ?Sized>(
    catalog: &CardCatalog,
    floor: u32,
    rarity: &RarityConfig,
    rng: &mut R,
) -> Result<Deck> {
    let allowed = allowed_rarities(floor);
    let mut pool: Vec<&CardDefinition> = catalog.with_rarities(&allowed);
    if pool.len() < DECK_SIZE {
        log::warn!(
            "floor {floor}: only {} cards match {allowed:?}, sampling the full catalog",
            pool.len()
        );
        pool = catalog.iter().collect();
    }

    let level = enemy_awakening(floor);
    let cards: Vec<Card> = rng
        .sample(&pool, DECK_SIZE)
        .into_iter()
        .map(|def| Card::from_definition(def).with_awakening(level, rarity))
        .collect();
    log::debug!(
        "floor {floor} enemy deck: {:?}",
        cards.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
    );

    Deck::new(&cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardClass;
    use crate::core::{BattleError, GameRng};

    #[test]
    fn test_bands() {
        assert_eq!(allowed_rarities(0), vec![Rarity::Common, Rarity::Uncommon]);
        assert_eq!(allowed_rarities(4), vec![Rarity::Common, Rarity::Uncommon]);
        assert_eq!(allowed_rarities(5).last(), Some(&Rarity::Rare));
        assert_eq!(allowed_rarities(10).last(), Some(&Rarity::Epic));
        assert_eq!(allowed_rarities(29).last(), Some(&Rarity::Legendary));
        assert_eq!(allowed_rarities(30).last(), Some(&Rarity::Mythic));
        assert_eq!(allowed_rarities(40).len(), Rarity::COUNT);
    }

    #[test]
    fn test_awakening_levels() {
        assert_eq!(enemy_awakening(0), 0);
        assert_eq!(enemy_awakening(10), 0);
        assert_eq!(enemy_awakening(11), 1);
        assert_eq!(enemy_awakening(35), 3);
    }

    #[test]
    fn test_low_floor_deck_respects_rarity() {
        let mut rng = GameRng::seeded(4);
        let deck = enemy_deck(CardCatalog::builtin(), 1, &RarityConfig::default(), &mut rng).unwrap();

        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| c.rarity <= Rarity::Uncommon));
        assert!(deck.iter().all(|c| c.awakening() == 0));
    }

    #[test]
    fn test_high_floor_awakens_within_cap() {
        let rarity = RarityConfig::default();
        let mut rng = GameRng::seeded(8);
        let deck = enemy_deck(CardCatalog::builtin(), 95, &rarity, &mut rng).unwrap();

        for card in deck.iter() {
            assert_eq!(card.awakening(), 9.min(rarity.max_awakening(card.rarity)));
        }
    }

    #[test]
    fn test_fallback_to_full_catalog() {
        let defs = (0..6).map(|i| {
            CardDefinition::new(format!("m{i}"), "Myth", CardClass::Chain, Rarity::Mythic, 20)
        });
        let catalog = CardCatalog::from_definitions(defs).unwrap();

        let deck = enemy_deck(&catalog, 1, &RarityConfig::default(), &mut GameRng::seeded(1)).unwrap();
        assert!(deck.iter().all(|c| c.rarity == Rarity::Mythic));
    }

    #[test]
    fn test_tiny_catalog_fails() {
        let defs = (0..3).map(|i| {
            CardDefinition::new(format!("c{i}"), "C", CardClass::Chain, Rarity::Common, 1)
        });
        let catalog = CardCatalog::from_definitions(defs).unwrap();

        let err = enemy_deck(&catalog, 1, &RarityConfig::default(), &mut GameRng::seeded(1)).unwrap_err();
        assert!(matches!(err, BattleError::InvalidDeck { .. }));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let rarity = RarityConfig::default();
        let a = enemy_deck(CardCatalog::builtin(), 12, &rarity, &mut GameRng::seeded(6)).unwrap();
        let b = enemy_deck(CardCatalog::builtin(), 12, &rarity, &mut GameRng::seeded(6)).unwrap();
        assert_eq!(a, b);
    }
}
