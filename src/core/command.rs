//! Command representation.
//!
//! Each `Command` names one engine operation and its arguments. Commands are
//! plain data so hosts can queue, log, replay, or ship them over a wire.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;

/// A mutating engine operation.
///
/// ## Example
///
/// ```
/// use mana_duel::core::{Command, InstanceId, PlayerId};
///
/// let play = Command::PlayCard { player: PlayerId::FIRST, hand_index: 0 };
/// let block = Command::DeclareDefender {
///     defender: InstanceId::new(12),
///     attacker: InstanceId::new(4),
/// };
/// assert_ne!(play, block);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Play the card at `hand_index` from `player`'s hand.
    PlayCard { player: PlayerId, hand_index: usize },
    /// Move from Main to Attack (no-op without a ready creature).
    EnterAttackPhase,
    /// Toggle a creature in the attacking set.
    DeclareAttacker(InstanceId),
    /// Move from Attack to Defense.
    EndAttackPhase,
    /// Assign a defending creature to block an attacker.
    DeclareDefender {
        defender: InstanceId,
        attacker: InstanceId,
    },
    /// Resolve combat and end the turn.
    EndDefensePhase,
    /// End the turn from Main without combat.
    EndTurn,
}

impl Command {
    /// Short operation name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::PlayCard { .. } => "play_card",
            Command::EnterAttackPhase => "enter_attack_phase",
            Command::DeclareAttacker(_) => "declare_attacker",
            Command::EndAttackPhase => "end_attack_phase",
            Command::DeclareDefender { .. } => "declare_defender",
            Command::EndDefensePhase => "end_defense_phase",
            Command::EndTurn => "end_turn",
        }
    }
}

/// A command accepted by the engine, with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - External submission after a successful local transition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Seat the command acted for: the defending player for
    /// `DeclareDefender`, the active player otherwise.
    pub actor: PlayerId,

    pub command: Command,

    /// Turn number when the command was accepted.
    pub turn: u32,

    /// Position in the game's command history.
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(actor: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            actor,
            command,
            turn,
            sequence,
        }
    }
}
