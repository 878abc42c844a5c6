//! Status effects: shields, freeze and damage over time.
//!
//! A card's statuses are a small tagged list. The list only offers
//! get/set/consume/tick primitives; when to call them is decided by the
//! resolver and the round upkeep.
//!
//! ## Rules
//!
//! - At most one shield; setting a shield replaces the old one.
//! - Freeze does not stack: re-applying keeps the longer duration.
//! - Any number of DOT stacks may coexist, one per application.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Shield strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShieldKind {
    #[serde(rename = "REFLECT_50")]
    Reflect50,
    #[serde(rename = "TOTAL_REFLECT_100")]
    TotalReflect100,
}

/// A shield on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shield {
    pub kind: ShieldKind,
    pub uses_left: u8,
    pub consumed_on_attack: bool,
    pub consumed_on_damaged: bool,
}

impl Shield {
    /// Single-use shield that breaks when its holder takes damage.
    #[must_use]
    pub fn new(kind: ShieldKind) -> Self {
        Self {
            kind,
            uses_left: 1,
            consumed_on_attack: false,
            consumed_on_damaged: true,
        }
    }
}

/// Combat step that may consume a shield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShieldTrigger {
    /// The shielded card attacked.
    Attack,
    /// The shielded card took damage.
    Damaged,
}

/// One damage-over-time stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotStack {
    pub rounds_left: u32,
    pub tick_damage: i64,
    pub source_id: CardId,
}

/// A status on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEffect {
    Frozen { rounds_left: u32 },
    Dot(DotStack),
    Shield(Shield),
}

/// The statuses held by one card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusEffects(SmallVec<[StatusEffect; 2]>);

impl StatusEffects {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate in application order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.0.iter()
    }

    /// Number of statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No statuses at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // === Shield ===

    /// The current shield, if any.
    #[must_use]
    pub fn shield(&self) -> Option<&Shield> {
        self.0.iter().find_map(|effect| match effect {
            StatusEffect::Shield(shield) => Some(shield),
            _ => None,
        })
    }

    /// Set the shield, replacing any existing one.
    pub fn set_shield(&mut self, shield: Shield) {
        self.clear_shield();
        self.0.push(StatusEffect::Shield(shield));
    }

    /// Remove the shield.
    pub fn clear_shield(&mut self) {
        self.0.retain(|effect| !matches!(effect, StatusEffect::Shield(_)));
    }

    /// Spend one use of the shield if `trigger` consumes it.
    ///
    /// Returns the shield as it was before consumption. The shield is removed
    /// once it has no uses left.
    pub fn consume_shield(&mut self, trigger: ShieldTrigger) -> Option<Shield> {
        let position = self.0.iter().position(|effect| match effect {
            StatusEffect::Shield(shield) => match trigger {
                ShieldTrigger::Attack => shield.consumed_on_attack,
                ShieldTrigger::Damaged => shield.consumed_on_damaged,
            },
            _ => false,
        })?;

        let StatusEffect::Shield(shield) = &mut self.0[position] else {
            return None;
        };
        let before = *shield;
        shield.uses_left = shield.uses_left.saturating_sub(1);
        if shield.uses_left == 0 {
            self.0.remove(position);
        }
        Some(before)
    }

    // === Freeze ===

    /// Freeze for `rounds`, keeping the longer of old and new durations.
    pub fn apply_frozen(&mut self, rounds: u32) {
        if rounds == 0 {
            return;
        }
        for effect in self.0.iter_mut() {
            if let StatusEffect::Frozen { rounds_left } = effect {
                *rounds_left = (*rounds_left).max(rounds);
                return;
            }
        }
        self.0.push(StatusEffect::Frozen {
            rounds_left: rounds,
        });
    }

    /// Rounds of freeze left (0 when not frozen).
    #[must_use]
    pub fn frozen_rounds(&self) -> u32 {
        self.0
            .iter()
            .find_map(|effect| match effect {
                StatusEffect::Frozen { rounds_left } => Some(*rounds_left),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Is the card frozen?
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen_rounds() > 0
    }

    /// Count freeze down by one round, removing it at zero.
    pub fn tick_frozen(&mut self) {
        for effect in self.0.iter_mut() {
            if let StatusEffect::Frozen { rounds_left } = effect {
                *rounds_left = rounds_left.saturating_sub(1);
            }
        }
        self.0
            .retain(|effect| !matches!(effect, StatusEffect::Frozen { rounds_left: 0 }));
    }

    // === Damage over time ===

    /// Add a DOT stack.
    pub fn add_dot(&mut self, dot: DotStack) {
        if dot.rounds_left > 0 {
            self.0.push(StatusEffect::Dot(dot));
        }
    }

    /// Active DOT stacks.
    pub fn dots(&self) -> impl Iterator<Item = &DotStack> {
        self.0.iter().filter_map(|effect| match effect {
            StatusEffect::Dot(dot) => Some(dot),
            _ => None,
        })
    }

    /// Return the stacks active this round, then count each down and drop
    /// the expired ones.
    pub fn tick_dots(&mut self) -> Vec<DotStack> {
        let active: Vec<DotStack> = self.dots().cloned().collect();
        for effect in self.0.iter_mut() {
            if let StatusEffect::Dot(dot) = effect {
                dot.rounds_left = dot.rounds_left.saturating_sub(1);
            }
        }
        self.0.retain(|effect| {
            !matches!(effect, StatusEffect::Dot(DotStack { rounds_left: 0, .. }))
        });
        active
    }
}
