//! Battle transitions: attack resolution, round upkeep, passing and the
//! combat log.
//!
//! All transitions take `&GameState` and return a new state; the input stays
//! valid and unchanged. Logged variants also return the `CombatEvent`s they
//! performed, in order.

mod events;
mod resolver;
mod round;

pub use events::{CombatEvent, CombatLog};
pub use resolver::{
    combat_power, preview_exchange, resolve_attack, resolve_attack_with_log, Exchange, Outcome,
};
pub use round::{apply_status, pass_turn, start_round};
