//! Mana economy and card play.
//!
//! - One resource card per player per turn
//! - A resource card adds its value to both total and available mana
//! - A creature is paid for from available mana
//!
//! Played cards enter the battlefield under a new instance ID.

use log::debug;

use crate::cards::CardKind;
use crate::core::entity::InstanceId;
use crate::core::error::{CardRef, RuleViolation};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase, Player};

use super::phase::{require_active, require_phase};

/// Check whether `player` may play the hand card at `hand_index`.
pub fn check_play(
    state: &GameState,
    player: PlayerId,
    hand_index: usize,
) -> Result<(), RuleViolation> {
    require_active(state, player)?;
    require_phase(state, Phase::Main)?;

    let seat = state.player(player);
    let card = seat
        .hand
        .get(hand_index)
        .ok_or(RuleViolation::InvalidCardReference(CardRef::HandIndex(hand_index)))?;

    check_affordable(seat, card.kind)
}

fn check_affordable(player: &Player, kind: CardKind) -> Result<(), RuleViolation> {
    match kind {
        CardKind::Mana { .. } if player.played_resource_this_turn => {
            Err(RuleViolation::ResourceAlreadyPlayedThisTurn)
        }
        CardKind::Creature { cost, .. } if player.available_mana < cost => {
            Err(RuleViolation::InsufficientMana {
                required: cost,
                available: player.available_mana,
            })
        }
        _ => Ok(()),
    }
}

/// Play a hand card onto the battlefield.
///
/// Returns the new state and the battlefield instance ID of the played card.
pub fn play_card(
    state: &GameState,
    player: PlayerId,
    hand_index: usize,
) -> Result<(GameState, InstanceId), RuleViolation> {
    check_play(state, player, hand_index)?;

    let mut next = state.clone();
    let id = next.ids.alloc();
    let seat = next.player_mut(player);
    let card = seat
        .take_from_hand(hand_index)
        .ok_or(RuleViolation::InvalidCardReference(CardRef::HandIndex(hand_index)))?;

    match card.kind {
        CardKind::Mana { resource_value } => {
            seat.total_mana += resource_value;
            seat.available_mana += resource_value;
            seat.played_resource_this_turn = true;
        }
        CardKind::Creature { cost, .. } => {
            seat.available_mana -= cost;
        }
    }

    debug!("{player} plays {} as {id}", card.name);
    seat.battlefield.insert(card.reissue(id));

    Ok((next, id))
}
