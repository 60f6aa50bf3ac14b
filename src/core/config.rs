//! Game configuration.
//!
//! The host supplies a `GameConfig` at game start:
//! - starting life and opening hand size
//! - how the turn counter advances at each turn boundary
//!
//! Every field has a default, so a partial JSON document is accepted.

use serde::{Deserialize, Serialize};

/// How `turn_number` advances at a turn boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnNumbering {
    /// Increment only when control wraps back to the first player,
    /// so both halves of a round share a turn number.
    #[default]
    FullRound,
    /// Increment at every turn boundary.
    EveryTurn,
}

impl TurnNumbering {
    /// Turn number after control passes to `next_active_index`.
    #[must_use]
    pub fn advance(self, turn_number: u32, next_active_index: usize) -> u32 {
        match self {
            TurnNumbering::FullRound if next_active_index != 0 => turn_number,
            _ => turn_number + 1,
        }
    }
}

/// Duel configuration.
///
/// ## Example
///
/// ```
/// use mana_duel::core::{GameConfig, TurnNumbering};
///
/// let config = GameConfig::from_json(r#"{ "starting_life": 30 }"#).unwrap();
/// assert_eq!(config.starting_life, 30);
/// assert_eq!(config.starting_hand_size, 3);
/// assert_eq!(config.turn_numbering, TurnNumbering::FullRound);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Life each player starts with.
    pub starting_life: i64,

    /// Cards drawn from the deck front into each opening hand.
    pub starting_hand_size: usize,

    /// Turn counter policy.
    pub turn_numbering: TurnNumbering,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            starting_hand_size: 3,
            turn_numbering: TurnNumbering::FullRound,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the turn counter policy.
    #[must_use]
    pub fn with_turn_numbering(mut self, numbering: TurnNumbering) -> Self {
        self.turn_numbering = numbering;
        self
    }
}
