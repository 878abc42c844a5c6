//! Round upkeep, passing and externally applied statuses.
//!
//! `start_round` runs before the acting player chooses an attack: every
//! active DOT stack on that player's field deals its tick damage (power clamps
//! at 0). Upkeep never removes cards and never changes whose turn it is.
//!
//! A frozen card cannot attack. Freezes count down when their owner's turn
//! ends, so a freeze of `n` rounds costs the card its owner's next `n` turns.
//! When every card on the acting field is frozen the player must
//! `pass_turn`.
//!
//! `apply_status` lets a driver put a freeze, DOT or shield on any field card.

use super::events::{CombatEvent, CombatLog};
use super::resolver::end_turn;
use crate::core::{BattleError, CardId, GameState, Result, Side};
use crate::effects::StatusEffect;

/// Run upkeep for the acting player.
///
/// # Errors
///
/// Returns `BattleError::MatchAlreadyFinished` if the match is over.
pub fn start_round(state: &GameState) -> Result<(GameState, Vec<CombatEvent>)> {
    if state.is_finished() {
        return Err(BattleError::MatchAlreadyFinished);
    }

    let turn = state.turn();
    let seat = state.current_player_index();
    let mut next = state.clone();
    let mut events = CombatLog::new();
    let (player, _, _) = next.seat_mut(seat);

    events.push(CombatEvent::RoundStart {
        turn,
        player_id: player.id().clone(),
    });

    for card in player.field_mut().iter_mut() {
        for dot in card.status_effects.tick_dots() {
            let before = card.power;
            let remaining = card.take_damage(dot.tick_damage);
            log::trace!(
                "{} takes {} dot damage from {} ({before} -> {remaining})",
                card.id,
                dot.tick_damage,
                dot.source_id
            );
            events.push(CombatEvent::DamageApplied {
                turn,
                card_id: card.id.clone(),
                amount: before - remaining,
                remaining,
            });
        }
    }

    Ok((next, events.into_events()))
}

/// End the acting player's turn without attacking.
///
/// Freezes on the acting field count down as after an attack.
///
/// # Errors
///
/// - `BattleError::MatchAlreadyFinished` if the match is over
/// - `BattleError::AttackAvailable` if some acting card is not frozen
pub fn pass_turn(state: &GameState) -> Result<(GameState, Vec<CombatEvent>)> {
    if state.is_finished() {
        return Err(BattleError::MatchAlreadyFinished);
    }
    if state.current_player().can_attack() {
        return Err(BattleError::AttackAvailable);
    }

    let player_id = state.current_player().id().clone();
    log::debug!("turn {}: {player_id} passes, field frozen", state.turn());
    let events = vec![CombatEvent::TurnPassed {
        turn: state.turn(),
        player_id,
    }];

    let mut next = state.clone();
    end_turn(&mut next);
    Ok((next, events))
}

/// Put a status on a field card of either player.
///
/// Freezes keep the longer duration, shields replace the current one and
/// DOT stacks accumulate.
///
/// # Errors
///
/// - `BattleError::MatchAlreadyFinished` if the match is over
/// - `BattleError::InvalidCardSelection` if no field holds `card_id`
pub fn apply_status(
    state: &GameState,
    card_id: &CardId,
    effect: StatusEffect,
) -> Result<(GameState, Vec<CombatEvent>)> {
    if state.is_finished() {
        return Err(BattleError::MatchAlreadyFinished);
    }
    let seat = (0..2)
        .find(|&seat| state.player(seat).field_card(card_id).is_some())
        .ok_or_else(|| BattleError::InvalidCardSelection {
            card_id: card_id.clone(),
            side: Side::Either,
        })?;

    let turn = state.turn();
    let mut next = state.clone();
    let mut events = CombatLog::new();
    let (player, _, _) = next.seat_mut(seat);
    let Some(card) = player.field_card_mut(card_id) else {
        return Err(BattleError::InvalidCardSelection {
            card_id: card_id.clone(),
            side: Side::Either,
        });
    };

    match effect {
        StatusEffect::Frozen { rounds_left } => card.status_effects.apply_frozen(rounds_left),
        StatusEffect::Dot(dot) => {
            events.push(CombatEvent::DotApplied {
                turn,
                card_id: card_id.clone(),
                source_id: dot.source_id.clone(),
                tick_damage: dot.tick_damage,
                rounds: dot.rounds_left,
            });
            card.status_effects.add_dot(dot);
        }
        StatusEffect::Shield(shield) => {
            events.push(CombatEvent::ShieldApplied {
                turn,
                card_id: card_id.clone(),
                shield: shield.kind,
                source_id: None,
            });
            card.status_effects.set_shield(shield);
        }
    }
    log::trace!("{card_id} status now {:?}", card.status_effects);

    Ok((next, events.into_events()))
}
