//! Combat resolution.
//!
//! `resolve` is a pure function of the declared attackers, the defender
//! assignments, and both battlefields. `apply` writes its `CombatReport`
//! back into a state.
//!
//! ## Damage model
//!
//! Every defender -> attacker assignment is resolved independently and
//! simultaneously:
//! - the defender loses toughness equal to the attacker's printed attack
//! - the attacker loses toughness equal to the defender's printed attack
//!
//! An attacker blocked by several defenders deals its full attack to each
//! of them; power is not split or used up. Unblocked attackers deal their
//! printed attack to the defending player. Toughness changes live only in
//! transient `CombatRecord`s and never touch base stats.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Transient shadow stats for one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CombatRecord {
    id: InstanceId,
    power: i64,
    toughness: i64,
}

impl CombatRecord {
    fn from_card(card: &CardInstance) -> Option<Self> {
        Some(Self {
            id: card.id,
            power: i64::from(card.kind.attack()?),
            toughness: i64::from(card.kind.defense()?),
        })
    }
}

/// Everything a combat changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    /// Player who took unblocked damage.
    pub defending_player: Option<PlayerId>,

    /// Sum of unblocked attackers' printed attack.
    pub player_damage: i64,

    /// Attackers with no defender assigned.
    pub unblocked: SmallVec<[InstanceId; 4]>,

    /// Attackers whose toughness reached zero or below.
    pub destroyed_attackers: SmallVec<[InstanceId; 4]>,

    /// Defenders whose toughness reached zero or below.
    pub destroyed_defenders: SmallVec<[InstanceId; 4]>,

    /// Surviving participants, tapped by the reset pass.
    pub survivors: SmallVec<[InstanceId; 8]>,
}

/// Compute the outcome of the current combat without changing the state.
#[must_use]
pub fn resolve(state: &GameState) -> CombatReport {
    let attacking_field = &state.active().battlefield;
    let defending_field = &state.defending().battlefield;

    let mut attackers: SmallVec<[CombatRecord; 8]> = state
        .attacking_cards
        .iter()
        .filter_map(|&id| attacking_field.get(id))
        .filter_map(CombatRecord::from_card)
        .collect();
    let attacker_index: FxHashMap<InstanceId, usize> = attackers
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id, i))
        .collect();

    let mut defenders: SmallVec<[CombatRecord; 8]> = SmallVec::new();
    let mut blocked = vec![false; attackers.len()];

    for (&defender_id, &attacker_id) in &state.defender_assignments {
        let Some(&slot) = attacker_index.get(&attacker_id) else {
            continue;
        };
        let Some(mut defender) = defending_field.get(defender_id).and_then(CombatRecord::from_card)
        else {
            continue;
        };

        let attacker = &mut attackers[slot];
        defender.toughness -= attacker.power;
        attacker.toughness -= defender.power;
        blocked[slot] = true;
        defenders.push(defender);
    }

    let mut report = CombatReport {
        defending_player: Some(state.active_player.opponent()),
        ..CombatReport::default()
    };

    for (record, &was_blocked) in attackers.iter().zip(&blocked) {
        if !was_blocked {
            report.unblocked.push(record.id);
            report.player_damage += record.power;
        }
    }

    for record in &attackers {
        if record.toughness <= 0 {
            report.destroyed_attackers.push(record.id);
        } else {
            report.survivors.push(record.id);
        }
    }
    for record in &defenders {
        if record.toughness <= 0 {
            report.destroyed_defenders.push(record.id);
        } else {
            report.survivors.push(record.id);
        }
    }

    report
}

/// Apply a combat report: life loss, destruction pass, reset pass.
///
/// Does not touch phase or the combat declarations; the caller clears them.
pub fn apply(state: &mut GameState, report: &CombatReport) {
    let attacker_seat = state.active_player;
    let defender_seat = attacker_seat.opponent();

    state.player_mut(defender_seat).life -= report.player_damage;

    for &id in &report.destroyed_attackers {
        state.player_mut(attacker_seat).battlefield.remove(id);
    }
    for &id in &report.destroyed_defenders {
        state.player_mut(defender_seat).battlefield.remove(id);
    }

    for &id in &report.survivors {
        for seat in [attacker_seat, defender_seat] {
            if let Some(card) = state.player_mut(seat).battlefield.get_mut(id) {
                card.clear_combat();
                card.tapped = true;
            }
        }
    }
}
