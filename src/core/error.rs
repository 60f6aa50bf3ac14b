//! Error types.
//!
//! - `RuleViolation`: a well-formed but game-illegal move. Returned as a value;
//!   the caller re-renders the unchanged state and prompts again.
//! - `CatalogError`: a card catalog that cannot be turned into decks.
//! - `SnapshotError`: binary snapshot encode/decode failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::InstanceId;
use super::player::PlayerId;
use super::state::Phase;

/// Why an engine operation was rejected.
///
/// A rejected operation never changes the game state.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("{0} is not the active player")]
    NotActivePlayer(PlayerId),

    #[error("operation requires the {expected:?} phase, game is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("a resource card was already played this turn")]
    ResourceAlreadyPlayedThisTurn,

    #[error("card costs {required} mana, only {available} available")]
    InsufficientMana { required: u32, available: u32 },

    #[error("invalid card reference: {0}")]
    InvalidCardReference(CardRef),

    #[error("card {0} is tapped")]
    TappedCardSelected(InstanceId),
}

/// The card a caller pointed at when a reference was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRef {
    /// Position in a player's hand.
    HandIndex(usize),
    /// Battlefield instance.
    Instance(InstanceId),
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardRef::HandIndex(i) => write!(f, "hand index {}", i),
            CardRef::Instance(id) => write!(f, "card {}", id),
        }
    }
}

/// Catalog ingestion failure.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card '{card}' is missing field '{field}'")]
    MissingField { card: String, field: &'static str },

    #[error("card '{card}' has negative {field}: {value}")]
    NegativeValue {
        card: String,
        field: &'static str,
        value: i64,
    },

    #[error("card '{card}' has out-of-range {field}: {value}")]
    OutOfRange {
        card: String,
        field: &'static str,
        value: i64,
    },

    #[error("catalog contains no cards")]
    Empty,
}

/// Snapshot encode/decode failure.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot encoding error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(String),
}
