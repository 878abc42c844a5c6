//! Error taxonomy for the battle core.
//!
//! Every error is a synchronous failure of the call that detected it. Nothing
//! is retried internally and no state is mutated before validation passes.

use thiserror::Error;

use super::ids::{CardId, Side};

/// Errors raised by deck construction, resolution, AI and catalog loading.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("invalid deck: {reason}")]
    InvalidDeck { reason: String },
    #[error("field holds {len} cards, more than the capacity of {capacity}")]
    FieldOverflow { len: usize, capacity: usize },
    #[error("match already finished")]
    MatchAlreadyFinished,
    #[error("card {card_id} is not on the {side} field")]
    InvalidCardSelection { card_id: CardId, side: Side },
    #[error("no moves available: a field is empty")]
    NoMovesAvailable,
    #[error("unknown card definition {0}")]
    UnknownCard(CardId),
    #[error("card definition {0} registered twice")]
    DuplicateDefinition(CardId),
    #[error("match needs exactly two players (got {0})")]
    PlayerCount(usize),
    #[error("catalog could not be parsed: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("snapshot is inconsistent: {reason}")]
    InvalidSnapshot { reason: String },
    #[error("card {0} is frozen and cannot attack")]
    CardFrozen(CardId),
    #[error("a field card can still attack, so the turn cannot be passed")]
    AttackAvailable,
    #[error("snapshot could not be encoded or decoded: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl BattleError {
    pub(crate) fn invalid_deck(reason: impl Into<String>) -> Self {
        Self::InvalidDeck {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BattleError>;
