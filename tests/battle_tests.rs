//! Attack resolution integration tests.
//!
//! Positions are built directly with `Player::from_parts` so every power and
//! draw is known in advance.

use card_clash::battle::{resolve_attack, resolve_attack_with_log, CombatEvent};
use card_clash::cards::{Card, CardClass, Rarity};
use card_clash::core::{BattleConfig, BattleError, GameRng, GameState, MatchStatus};
use card_clash::effects::ShieldKind;
use card_clash::zones::{Deck, Player};

fn card(id: &str, class: CardClass, power: i64) -> Card {
    Card::new(id, id, class, Rarity::Common, power)
}

/// `field` on the table, `pile` to draw from (last card on top).
fn player(id: &str, field: Vec<Card>, pile: Vec<Card>) -> Player {
    let mut cards: Vec<Card> = field.iter().chain(pile.iter()).cloned().collect();
    for i in cards.len()..6 {
        cards.push(card(&format!("{id}-spare{i}"), CardClass::Chain, 1));
    }
    Player::from_parts(id, Deck::new(&cards).unwrap(), pile, field).unwrap()
}

fn match_state(a: Player, b: Player) -> GameState {
    GameState::new([a, b], BattleConfig::default(), GameRng::seeded(99))
}

// =============================================================================
// Power Resolution
// =============================================================================

#[test]
fn test_ten_beats_seven() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Control, 10)], vec![]),
        player(
            "rival",
            vec![card("r1", CardClass::Chain, 7), card("r2", CardClass::Evade, 3)],
            vec![],
        ),
    );

    let next = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();

    assert_eq!(next.player(0).field_card(&"h1".into()).unwrap().power, 3);
    assert!(next.player(1).field_card(&"r1".into()).is_none());
    assert_eq!(next.player(1).field().len(), 1);
    assert_eq!(next.turn(), state.turn() + 1);
    assert_eq!(next.status(), MatchStatus::InProgress);
    assert_eq!(next.current_player().id().as_str(), "rival");
}

#[test]
fn test_five_ties_five() {
    let state = match_state(
        player(
            "hero",
            vec![card("h1", CardClass::Control, 5), card("h2", CardClass::Evade, 2)],
            vec![],
        ),
        player(
            "rival",
            vec![card("r1", CardClass::Chain, 5), card("r2", CardClass::Attack, 2)],
            vec![],
        ),
    );

    let next = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();

    assert!(next.player(0).field_card(&"h1".into()).is_none());
    assert!(next.player(1).field_card(&"r1".into()).is_none());
    assert_eq!(next.status(), MatchStatus::InProgress);
}

#[test]
fn test_full_synergy_adds_two() {
    // Three CHAIN cards: each fights at +2
    let state = match_state(
        player(
            "hero",
            vec![
                card("h1", CardClass::Chain, 6),
                card("h2", CardClass::Chain, 1),
                card("h3", CardClass::Chain, 1),
            ],
            vec![],
        ),
        player(
            "rival",
            vec![card("r1", CardClass::Control, 7), card("r2", CardClass::Evade, 1)],
            vec![],
        ),
    );

    let (next, events) = resolve_attack_with_log(&state, &"h1".into(), &"r1".into()).unwrap();

    assert!(matches!(
        events[0],
        CombatEvent::AttackDeclared {
            attacker_power: 8,
            defender_power: 7,
            ..
        }
    ));
    assert_eq!(next.player(0).field_card(&"h1".into()).unwrap().power, 1);
}

// =============================================================================
// Match End
// =============================================================================

#[test]
fn test_mutual_wipe_defender_wins() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 5)], vec![]),
        player("rival", vec![card("r1", CardClass::Chain, 5)], vec![]),
    );

    let next = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();

    assert_eq!(next.status(), MatchStatus::Finished);
    assert_eq!(next.winner_id().unwrap().as_str(), "rival");
}

#[test]
fn test_mutual_wipe_favors_defender_on_second_seat() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 5)], vec![]),
        player("rival", vec![card("r1", CardClass::Chain, 5)], vec![]),
    )
    .with_current_player(1);

    let next = resolve_attack(&state, &"r1".into(), &"h1".into()).unwrap();

    assert_eq!(next.winner_id().unwrap().as_str(), "hero");
    assert_eq!(next.current_player_index(), 0);
}

#[test]
fn test_losing_last_attacker_loses() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 2)], vec![]),
        player("rival", vec![card("r1", CardClass::Chain, 9)], vec![]),
    );

    let next = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();

    assert_eq!(next.winner_id().unwrap().as_str(), "rival");
    assert_eq!(next.player(1).field_card(&"r1".into()).unwrap().power, 7);
}

#[test]
fn test_replacement_draw_prevents_loss() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 9)], vec![]),
        player(
            "rival",
            vec![card("r1", CardClass::Chain, 4)],
            vec![card("r2", CardClass::Evade, 3)],
        ),
    );

    let next = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();

    assert_eq!(next.status(), MatchStatus::InProgress);
    assert!(next.player(1).field_card(&"r2".into()).is_some());
}

#[test]
fn test_finished_state_rejected() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 9)], vec![]),
        player("rival", vec![card("r1", CardClass::Chain, 4)], vec![]),
    );
    let done = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();

    let err = resolve_attack(&done, &"h1".into(), &"r1".into()).unwrap_err();
    assert!(matches!(err, BattleError::MatchAlreadyFinished));
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_previous_state_unchanged() {
    let state = match_state(
        player(
            "hero",
            vec![card("h1", CardClass::Attack, 10), card("h2", CardClass::Evade, 1)],
            vec![card("h3", CardClass::Chain, 2)],
        ),
        player(
            "rival",
            vec![card("r1", CardClass::Chain, 12), card("r2", CardClass::Evade, 1)],
            vec![card("r3", CardClass::Chain, 2)],
        ),
    );
    let before = state.clone();

    let next = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();
    let _ = resolve_attack(&next, &"r1".into(), &"h2".into()).unwrap();

    assert_eq!(state, before);
}

#[test]
fn test_invalid_selection_leaves_state() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 9)], vec![]),
        player("rival", vec![card("r1", CardClass::Chain, 4)], vec![]),
    );
    let before = state.clone();

    assert!(matches!(
        resolve_attack(&state, &"r1".into(), &"h1".into()),
        Err(BattleError::InvalidCardSelection { .. })
    ));
    assert_eq!(state, before);
}

// =============================================================================
// Combat Log
// =============================================================================

#[test]
fn test_log_includes_replacement_triggers() {
    let state = match_state(
        player("hero", vec![card("h1", CardClass::Chain, 9)], vec![]),
        player(
            "rival",
            vec![card("r1", CardClass::Chain, 4), card("r2", CardClass::Evade, 3)],
            vec![card("guard", CardClass::Defense, 5)],
        ),
    );

    let (next, events) = resolve_attack_with_log(&state, &"h1".into(), &"r1".into()).unwrap();

    assert_eq!(
        events,
        vec![
            CombatEvent::AttackDeclared {
                turn: 1,
                attacker_id: "h1".into(),
                defender_id: "r1".into(),
                attacker_power: 9,
                defender_power: 4,
            },
            CombatEvent::DamageApplied {
                turn: 1,
                card_id: "h1".into(),
                amount: 4,
                remaining: 5,
            },
            CombatEvent::CardDestroyed {
                turn: 1,
                card_id: "r1".into(),
                owner_id: "rival".into(),
            },
            CombatEvent::ShieldApplied {
                turn: 1,
                card_id: "r2".into(),
                shield: ShieldKind::Reflect50,
                source_id: Some("guard".into()),
            },
        ]
    );
    let shielded = next.player(1).field_card(&"r2".into()).unwrap();
    assert!(shielded.status_effects.shield().is_some());
}

#[test]
fn test_tie_log_order() {
    let state = match_state(
        player(
            "hero",
            vec![card("h1", CardClass::Chain, 5), card("h2", CardClass::Evade, 1)],
            vec![],
        ),
        player(
            "rival",
            vec![card("r1", CardClass::Control, 5), card("r2", CardClass::Evade, 1)],
            vec![],
        ),
    );

    let (_, events) = resolve_attack_with_log(&state, &"h1".into(), &"r1".into()).unwrap();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            CombatEvent::AttackDeclared { .. } => "attack",
            CombatEvent::DamageApplied { .. } => "damage",
            CombatEvent::CardDestroyed { .. } => "destroyed",
            _ => "other",
        })
        .collect();

    assert_eq!(kinds, vec!["attack", "damage", "damage", "destroyed", "destroyed"]);
    assert!(matches!(
        &events[3],
        CombatEvent::CardDestroyed { card_id, .. } if card_id.as_str() == "r1"
    ));
}

#[test]
fn test_unlogged_matches_logged() {
    let state = match_state(
        player(
            "hero",
            vec![card("h1", CardClass::Attack, 10), card("h2", CardClass::Evade, 1)],
            vec![card("h3", CardClass::Support, 2)],
        ),
        player(
            "rival",
            vec![card("r1", CardClass::Chain, 10), card("r2", CardClass::Evade, 1)],
            vec![card("r3", CardClass::Strategy, 2)],
        ),
    );

    let plain = resolve_attack(&state, &"h1".into(), &"r1".into()).unwrap();
    let (logged, _) = resolve_attack_with_log(&state, &"h1".into(), &"r1".into()).unwrap();

    assert_eq!(plain, logged);
}
