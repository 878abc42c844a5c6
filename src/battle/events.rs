//! Combat events.
//!
//! Every logged transition appends events in the order it performs them.
//! The log is an audit trail of one call; nothing in the engine reads it back.
//!
//! Events serialize as internally tagged JSON:
//!
//! ```json
//! { "type": "card_destroyed", "turn": 3, "card_id": "ember-moth", "owner_id": "hero" }
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardClass;
use crate::core::{CardId, PlayerId};
use crate::effects::{ShieldKind, TriggeredEffect};

/// One battle-log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatEvent {
    /// Upkeep for the acting player began.
    RoundStart { turn: u32, player_id: PlayerId },

    /// An attack was declared. Powers include buffs and synergy.
    AttackDeclared {
        turn: u32,
        attacker_id: CardId,
        defender_id: CardId,
        attacker_power: i64,
        defender_power: i64,
    },

    /// A card lost `amount` power and has `remaining` left.
    DamageApplied {
        turn: u32,
        card_id: CardId,
        amount: i64,
        remaining: i64,
    },

    /// A card left its owner's field.
    CardDestroyed {
        turn: u32,
        card_id: CardId,
        owner_id: PlayerId,
    },

    /// A card received a shield, from another card or from outside.
    ShieldApplied {
        turn: u32,
        card_id: CardId,
        shield: ShieldKind,
        source_id: Option<CardId>,
    },

    /// A damage-over-time stack was added.
    DotApplied {
        turn: u32,
        card_id: CardId,
        source_id: CardId,
        tick_damage: i64,
        rounds: u32,
    },

    /// A rarity proc fired on an enter-field trigger.
    ProcTriggered {
        turn: u32,
        card_id: CardId,
        class: CardClass,
    },

    /// The acting player's whole field was frozen, so the turn passed.
    TurnPassed { turn: u32, player_id: PlayerId },
}

impl CombatEvent {
    /// Turn the event happened on.
    #[must_use]
    pub fn turn(&self) -> u32 {
        match self {
            CombatEvent::RoundStart { turn, .. }
            | CombatEvent::AttackDeclared { turn, .. }
            | CombatEvent::DamageApplied { turn, .. }
            | CombatEvent::CardDestroyed { turn, .. }
            | CombatEvent::ShieldApplied { turn, .. }
            | CombatEvent::DotApplied { turn, .. }
            | CombatEvent::ProcTriggered { turn, .. }
            | CombatEvent::TurnPassed { turn, .. } => *turn,
        }
    }
}

/// Event sink for one transition.
///
/// A disabled log drops everything, so logged and unlogged transitions share
/// one code path.
#[derive(Clone, Debug)]
pub struct CombatLog {
    enabled: bool,
    events: Vec<CombatEvent>,
}

impl CombatLog {
    /// A recording log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            events: Vec::new(),
        }
    }

    /// A log that records nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            events: Vec::new(),
        }
    }

    /// Is this log recording?
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append an event.
    pub fn push(&mut self, event: CombatEvent) {
        if self.enabled {
            self.events.push(event);
        }
    }

    /// Append the loggable parts of an enter-field trigger.
    ///
    /// Shields and procs have events; buffs and heals do not.
    pub fn record_triggers(&mut self, turn: u32, effects: &[TriggeredEffect]) {
        for effect in effects {
            match effect {
                TriggeredEffect::ShieldGranted {
                    source,
                    target,
                    kind,
                } => self.push(CombatEvent::ShieldApplied {
                    turn,
                    card_id: target.clone(),
                    shield: *kind,
                    source_id: Some(source.clone()),
                }),
                TriggeredEffect::Proc { source, class } => self.push(CombatEvent::ProcTriggered {
                    turn,
                    card_id: source.clone(),
                    class: *class,
                }),
                TriggeredEffect::PowerBuff { .. } | TriggeredEffect::Healed { .. } => {}
            }
        }
    }

    /// Recorded events.
    #[must_use]
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Take the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<CombatEvent> {
        self.events
    }
}

impl Default for CombatLog {
    fn default() -> Self {
        Self::new()
    }
}
