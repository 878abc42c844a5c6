//! Playing whole matches.
//!
//! A `Duel` alternates between two `Controller`s, one per seat, until the
//! match ends. `AiAgent` is a controller; `ScriptedController` replays fixed
//! moves for tests and reproductions.

mod controller;
mod runner;

pub use controller::{Controller, ScriptedController};
pub use runner::{Duel, DuelConfig, DuelReport};
