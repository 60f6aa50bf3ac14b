//! Rules engine trait.
//!
//! A rules engine is a pure state transformer: every call takes a complete
//! `GameState` and returns a new one or a `RuleViolation`. It never mutates
//! its input and performs no I/O, so it needs no locking. It is not safe to
//! apply two commands against the same state value concurrently and expect
//! both to land; callers serialize commands per game.

use serde::{Deserialize, Serialize};

use crate::core::command::Command;
use crate::core::config::GameConfig;
use crate::core::error::RuleViolation;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players fell to zero life together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply`: Must leave `state` untouched on rejection
/// - `legal_commands`: Every returned command must be accepted by `apply`
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Apply a command, returning the resulting state.
    fn apply(&self, state: &GameState, command: Command) -> Result<GameState, RuleViolation>;

    /// Enumerate the commands `apply` would currently accept.
    fn legal_commands(&self, state: &GameState) -> Vec<Command>;

    // === Convenience Methods ===

    /// Seat a command acts for.
    fn actor(&self, state: &GameState, command: Command) -> PlayerId {
        match command {
            Command::PlayCard { player, .. } => player,
            Command::DeclareDefender { .. } => state.active_player.opponent(),
            _ => state.active_player,
        }
    }

    /// Check whether a command would be accepted.
    fn is_legal(&self, state: &GameState, command: Command) -> bool {
        self.apply(state, command).is_ok()
    }
}
