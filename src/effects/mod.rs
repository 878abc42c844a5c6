//! Card effects: enter-field triggers, field synergy and status effects.
//!
//! - `trigger_enter_field`: class trigger fired once when a card joins a field
//! - `synergy_bonuses`: per-class attack bonus from a field's composition
//! - `StatusEffects`: shields, freeze and damage-over-time on a card
//!
//! Triggers and synergy are plain functions over a field; they never look at
//! the rest of the match. The resolver decides when to call them.

mod enter_field;
mod status;
mod synergy;

pub use enter_field::{trigger_enter_field, TriggeredEffect};
pub use status::{DotStack, Shield, ShieldKind, ShieldTrigger, StatusEffect, StatusEffects};
pub use synergy::{attack_bonus, synergy_bonuses, SynergyBonus, SynergyMap};
