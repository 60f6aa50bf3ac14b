//! Phase gating.

use crate::core::error::RuleViolation;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase};

/// Reject unless the game is in `expected`.
pub fn require_phase(state: &GameState, expected: Phase) -> Result<(), RuleViolation> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(RuleViolation::WrongPhase {
            expected,
            actual: state.phase,
        })
    }
}

/// Reject unless `player` is taking the current turn.
pub fn require_active(state: &GameState, player: PlayerId) -> Result<(), RuleViolation> {
    if state.active_player == player {
        Ok(())
    } else {
        Err(RuleViolation::NotActivePlayer(player))
    }
}
