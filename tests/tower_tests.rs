//! Tower progression: enemy decks, rewards and a short climb.

use card_clash::ai::{AiAgent, Difficulty};
use card_clash::cards::{CardCatalog, Rarity};
use card_clash::core::{CardId, GameRng, MatchBuilder, RarityConfig, DECK_SIZE};
use card_clash::duel::Duel;
use card_clash::tower::{allowed_rarities, enemy_deck, floor_reward};
use card_clash::zones::Deck;

// =============================================================================
// Enemy Decks
// =============================================================================

#[test]
fn test_every_floor_band_builds_a_deck() {
    let rarity = RarityConfig::default();
    let mut rng = GameRng::seeded(17);

    for floor in [1, 4, 5, 9, 10, 19, 20, 29, 30, 39, 40, 100] {
        let deck = enemy_deck(CardCatalog::builtin(), floor, &rarity, &mut rng).unwrap();
        let allowed = allowed_rarities(floor);

        assert_eq!(deck.len(), DECK_SIZE);
        assert!(
            deck.iter().all(|c| allowed.contains(&c.rarity)),
            "floor {floor} produced a card outside {allowed:?}"
        );
    }
}

#[test]
fn test_bands_only_widen() {
    let mut previous = allowed_rarities(1);
    for floor in 2..=60 {
        let current = allowed_rarities(floor);
        assert!(previous.iter().all(|r| current.contains(r)));
        previous = current;
    }
    assert!(previous.contains(&Rarity::Diamond));
}

#[test]
fn test_enemies_grow_stronger() {
    let rarity = RarityConfig::default();
    let total = |floor: u32| -> i64 {
        let mut rng = GameRng::seeded(u64::from(floor));
        (0..20)
            .map(|_| {
                let deck = enemy_deck(CardCatalog::builtin(), floor, &rarity, &mut rng).unwrap();
                deck.iter().map(|c| c.power).sum::<i64>()
            })
            .sum()
    };

    assert!(total(45) > total(1));
}

// =============================================================================
// Rewards
// =============================================================================

#[test]
fn test_reward_schedule() {
    let chests: Vec<u32> = (1..=20).filter(|&f| floor_reward(f).chest.is_some()).collect();
    assert_eq!(chests, vec![5, 10, 15, 20]);

    assert_eq!(floor_reward(1).coins, 25);
    assert_eq!(floor_reward(15).chest, Some(Rarity::Epic));
}

// =============================================================================
// Climb
// =============================================================================

#[test]
fn test_short_climb() {
    let catalog = CardCatalog::builtin();
    let ids: Vec<CardId> = [
        "storm-captain",
        "aegis-knight",
        "war-chanter",
        "shadow-step",
        "chainlord",
        "venom-adept",
    ]
    .into_iter()
    .map(CardId::from)
    .collect();
    let hero_deck = Deck::from_catalog(catalog, &ids).unwrap();
    let rarity = RarityConfig::default();

    let mut coins = 0;
    for floor in 1..=5 {
        let mut rng = GameRng::seeded(u64::from(floor));
        let enemy = enemy_deck(catalog, floor, &rarity, &mut rng).unwrap();
        let state = MatchBuilder::new()
            .player("hero", hero_deck.clone())
            .player("tower", enemy)
            .build(u64::from(floor) * 31)
            .unwrap();

        let mut hero = AiAgent::new(Difficulty::Hard, GameRng::seeded(1));
        let mut tower = AiAgent::new(Difficulty::Easy, GameRng::seeded(2));
        let report = Duel::default().run(state, [&mut hero, &mut tower]).unwrap();

        assert!(report.is_finished());
        if report.winner().map(|w| w.as_str()) == Some("hero") {
            coins += floor_reward(floor).coins;
        }
    }

    assert!(coins <= (1..=5).map(|f| floor_reward(f).coins).sum());
}
