//! Attack resolution.
//!
//! `resolve_attack` is the core transition: given a state and an
//! attacker/defender pair it returns the successor state.
//!
//! ## Algorithm
//!
//! 1. The match must be in progress.
//! 2. The attacker must be on the acting player's field and the defender on
//!    the opponent's. A frozen card cannot attack.
//! 3. Combat power = effective power (buffs applied) + class synergy on the
//!    card's own field.
//! 4. The stronger card survives with the margin as its new power (its buff is
//!    spent); the weaker is destroyed. Equal powers destroy both, defender
//!    first. Every destruction triggers one replacement draw.
//! 5. Freezes on the attacking field count down, then the turn passes to the
//!    other seat.
//! 6. After all removals and draws: an empty field loses. If both fields are
//!    empty the defending player wins.
//!
//! Validation happens before anything is cloned, so a failed call leaves no
//! trace. The input state is never modified.

use im::Vector;

use super::events::{CombatEvent, CombatLog};
use crate::cards::{effective_power, Card};
use crate::core::{opponent_index, BattleError, CardId, GameState, Result, Side};
use crate::effects::{attack_bonus, synergy_bonuses, ShieldTrigger};

/// Result of comparing two combat powers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    AttackerWins { margin: i64 },
    DefenderWins { margin: i64 },
    Tie,
}

/// Powers and outcome of one attacker/defender pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exchange {
    pub attacker_power: i64,
    pub defender_power: i64,
    pub outcome: Outcome,
}

impl Exchange {
    /// Compare two combat powers.
    #[must_use]
    pub fn between(attacker_power: i64, defender_power: i64) -> Self {
        let outcome = match attacker_power.cmp(&defender_power) {
            std::cmp::Ordering::Greater => Outcome::AttackerWins {
                margin: attacker_power - defender_power,
            },
            std::cmp::Ordering::Less => Outcome::DefenderWins {
                margin: defender_power - attacker_power,
            },
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        Self {
            attacker_power,
            defender_power,
            outcome,
        }
    }
}

/// Effective power plus the synergy bonus of the card's own field.
///
/// Saturates at `i64::MAX`.
#[must_use]
pub fn combat_power(card: &Card, own_field: &Vector<Card>) -> i64 {
    let synergy = attack_bonus(&synergy_bonuses(own_field), card.class);
    effective_power(card).saturating_add(synergy)
}

/// Work out what an attack would do without performing it.
#[must_use]
pub fn preview_exchange(
    attacker: &Card,
    attacker_field: &Vector<Card>,
    defender: &Card,
    defender_field: &Vector<Card>,
) -> Exchange {
    Exchange::between(
        combat_power(attacker, attacker_field),
        combat_power(defender, defender_field),
    )
}

/// Resolve an attack and return the next state.
///
/// # Errors
///
/// - `BattleError::MatchAlreadyFinished` if the match is over
/// - `BattleError::InvalidCardSelection` if either card is not on its field
/// - `BattleError::CardFrozen` if the attacker is frozen
pub fn resolve_attack(
    state: &GameState,
    attacker_id: &CardId,
    defender_id: &CardId,
) -> Result<GameState> {
    resolve(state, attacker_id, defender_id, &mut CombatLog::disabled())
}

/// `resolve_attack` that also returns the events it performed.
///
/// # Errors
///
/// Same as `resolve_attack`.
pub fn resolve_attack_with_log(
    state: &GameState,
    attacker_id: &CardId,
    defender_id: &CardId,
) -> Result<(GameState, Vec<CombatEvent>)> {
    let mut events = CombatLog::new();
    let next = resolve(state, attacker_id, defender_id, &mut events)?;
    Ok((next, events.into_events()))
}

fn resolve(
    state: &GameState,
    attacker_id: &CardId,
    defender_id: &CardId,
    events: &mut CombatLog,
) -> Result<GameState> {
    if state.is_finished() {
        return Err(BattleError::MatchAlreadyFinished);
    }

    let attacking = state.current_player();
    let defending = state.opponent_player();
    let attacker = attacking
        .field_card(attacker_id)
        .ok_or_else(|| BattleError::InvalidCardSelection {
            card_id: attacker_id.clone(),
            side: Side::Attacker,
        })?;
    let defender = defending
        .field_card(defender_id)
        .ok_or_else(|| BattleError::InvalidCardSelection {
            card_id: defender_id.clone(),
            side: Side::Defender,
        })?;
    if attacker.status_effects.is_frozen() {
        return Err(BattleError::CardFrozen(attacker_id.clone()));
    }

    let exchange = preview_exchange(attacker, attacking.field(), defender, defending.field());
    let turn = state.turn();
    let attacker_seat = state.current_player_index();
    let defender_seat = opponent_index(attacker_seat);

    log::debug!(
        "turn {turn}: {attacker_id} ({}) attacks {defender_id} ({}) -> {:?}",
        exchange.attacker_power,
        exchange.defender_power,
        exchange.outcome
    );
    events.push(CombatEvent::AttackDeclared {
        turn,
        attacker_id: attacker_id.clone(),
        defender_id: defender_id.clone(),
        attacker_power: exchange.attacker_power,
        defender_power: exchange.defender_power,
    });

    let mut next = state.clone();
    spend_attack_shield(&mut next, attacker_seat, attacker_id);

    match exchange.outcome {
        Outcome::AttackerWins { margin } => {
            survive(
                &mut next,
                attacker_seat,
                attacker_id,
                exchange.defender_power,
                margin,
                turn,
                events,
            );
            destroy(&mut next, defender_seat, defender_id, turn, events);
        }
        Outcome::DefenderWins { margin } => {
            survive(
                &mut next,
                defender_seat,
                defender_id,
                exchange.attacker_power,
                margin,
                turn,
                events,
            );
            destroy(&mut next, attacker_seat, attacker_id, turn, events);
        }
        Outcome::Tie => {
            events.push(CombatEvent::DamageApplied {
                turn,
                card_id: defender_id.clone(),
                amount: exchange.attacker_power,
                remaining: 0,
            });
            events.push(CombatEvent::DamageApplied {
                turn,
                card_id: attacker_id.clone(),
                amount: exchange.defender_power,
                remaining: 0,
            });
            destroy(&mut next, defender_seat, defender_id, turn, events);
            destroy(&mut next, attacker_seat, attacker_id, turn, events);
        }
    }

    end_turn(&mut next);

    let attacker_lost = next.player(attacker_seat).has_lost();
    let defender_lost = next.player(defender_seat).has_lost();
    let winner_seat = match (attacker_lost, defender_lost) {
        (true, true) | (true, false) => Some(defender_seat),
        (false, true) => Some(attacker_seat),
        (false, false) => None,
    };
    if let Some(seat) = winner_seat {
        let winner = next.player(seat).id().clone();
        log::debug!("match finished on turn {turn}: {winner} wins");
        next.finish(winner);
    }

    Ok(next)
}

/// Count down the acting field's freezes and hand the turn over.
pub(super) fn end_turn(state: &mut GameState) {
    let seat = state.current_player_index();
    let (player, _, _) = state.seat_mut(seat);
    for card in player.field_mut().iter_mut() {
        card.status_effects.tick_frozen();
    }
    state.advance_turn();
}

/// The attacker's shield, if it breaks on attack.
fn spend_attack_shield(state: &mut GameState, seat: usize, card_id: &CardId) {
    let (player, _, _) = state.seat_mut(seat);
    if let Some(card) = player.field_card_mut(card_id) {
        if let Some(shield) = card.status_effects.consume_shield(ShieldTrigger::Attack) {
            log::trace!("{card_id} spent {:?} shield attacking", shield.kind);
        }
    }
}

/// The winner keeps the margin as its power and spends its buff.
fn survive(
    state: &mut GameState,
    seat: usize,
    card_id: &CardId,
    damage: i64,
    margin: i64,
    turn: u32,
    events: &mut CombatLog,
) {
    let (player, _, _) = state.seat_mut(seat);
    let Some(card) = player.field_card_mut(card_id) else {
        return;
    };
    card.power = margin.max(0);
    card.buff_power_pct_total = 0.0;
    if damage > 0 {
        if let Some(shield) = card.status_effects.consume_shield(ShieldTrigger::Damaged) {
            log::trace!("{card_id} spent {:?} shield taking damage", shield.kind);
        }
    }

    events.push(CombatEvent::DamageApplied {
        turn,
        card_id: card_id.clone(),
        amount: damage,
        remaining: card.power,
    });
}

/// Remove a card, refill the field and log both.
fn destroy(state: &mut GameState, seat: usize, card_id: &CardId, turn: u32, events: &mut CombatLog) {
    let (player, config, rng) = state.seat_mut(seat);
    let outcome = player.remove_card(card_id, config, rng);
    events.push(CombatEvent::CardDestroyed {
        turn,
        card_id: card_id.clone(),
        owner_id: player.id().clone(),
    });
    if let Some(drawn) = outcome.drawn {
        events.record_triggers(turn, &drawn.triggered);
    }
}
