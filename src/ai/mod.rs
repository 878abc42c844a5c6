//! Computer opponents.
//!
//! Scoring (`score_moves`) is pure and deterministic; only `select_move`
//! consumes randomness, from the agent's own RNG.

mod agent;
mod config;

pub use agent::{score_exchange, score_moves, select_move, AiAgent, Difficulty, Move, ScoredMove};
pub use config::AiConfig;
