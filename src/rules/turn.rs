//! Turn-end procedure.
//!
//! Runs once per turn boundary:
//! 1. pass control and advance the turn counter per `TurnNumbering`
//! 2. refill the new active player's mana and clear the resource flag
//! 3. untap the new active player's battlefield (opponent untouched)
//! 4. draw one card for the new active player; an empty deck draws nothing

use log::debug;

use crate::core::config::TurnNumbering;
use crate::core::state::{GameState, Phase};

/// Hand control to the other player.
pub fn end_turn(state: &mut GameState, numbering: TurnNumbering) {
    let next = state.active_player.opponent();

    state.turn_number = numbering.advance(state.turn_number, next.index());
    state.active_player = next;
    state.phase = Phase::Main;
    state.attacking_cards.clear();
    state.defender_assignments.clear();

    let player = state.player_mut(next);
    player.available_mana = player.total_mana;
    player.played_resource_this_turn = false;
    player.battlefield.untap_all();

    match player.draw() {
        Some(card) => debug!("{next} draws {card}"),
        None => debug!("{next} has an empty deck, no draw"),
    }

    debug!("turn {} begins for {next}", state.turn_number);
}
