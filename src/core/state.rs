//! Game state: players, zones, phase, and combat declarations.
//!
//! ## GameState
//!
//! A complete, self-contained snapshot of one duel. Engine operations take a
//! `&GameState` and return a new one, so presentation code can hold on to
//! any snapshot it has been handed.
//!
//! Uses `im` persistent data structures, so producing a new snapshot per
//! operation is O(1) plus the cost of the cards that actually changed.

use im::{OrdMap, OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::entity::{InstanceId, InstanceIdAllocator};
use super::error::SnapshotError;
use super::player::{PlayerId, PlayerPair};
use crate::cards::CardInstance;
use crate::rules::GameResult;
use crate::zones::Battlefield;

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards may be played; the turn may end or move to combat.
    #[default]
    Main,
    /// The active player declares attackers.
    Attack,
    /// The defending player assigns blockers.
    Defense,
}

/// One player's zones and resources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Can go negative. The engine reports it; the host decides the loss.
    pub life: i64,

    pub hand: Vector<CardInstance>,
    pub battlefield: Battlefield,

    /// Front is the next draw.
    pub deck: Vector<CardInstance>,

    /// Resource value of every mana card ever played.
    pub total_mana: u32,

    /// Unspent mana this turn. Never exceeds `total_mana`.
    pub available_mana: u32,

    pub played_resource_this_turn: bool,
}

impl Player {
    /// Create a player with empty zones and no mana.
    #[must_use]
    pub fn new(id: PlayerId, life: i64) -> Self {
        Self {
            id,
            life,
            hand: Vector::new(),
            battlefield: Battlefield::new(),
            deck: Vector::new(),
            total_mana: 0,
            available_mana: 0,
            played_resource_this_turn: false,
        }
    }

    /// Move the front deck card to the end of the hand.
    ///
    /// Returns the drawn card's ID, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<InstanceId> {
        let card = self.deck.pop_front()?;
        let id = card.id;
        self.hand.push_back(card);
        Some(id)
    }

    /// Remove and return the hand card at `index`.
    pub fn take_from_hand(&mut self, index: usize) -> Option<CardInstance> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }
}

/// Complete state of one duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerPair<Player>,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Starts at 1.
    pub turn_number: u32,

    pub phase: Phase,

    /// Declared attackers. Only meaningful in Attack/Defense.
    pub attacking_cards: OrdSet<InstanceId>,

    /// Defender -> attacker it blocks. Only meaningful in Defense.
    pub defender_assignments: OrdMap<InstanceId, InstanceId>,

    /// Per-game ID source.
    pub ids: InstanceIdAllocator,
}

impl GameState {
    /// Create a state with two empty players at turn 1, Main phase,
    /// first player active.
    #[must_use]
    pub fn new(starting_life: i64) -> Self {
        Self {
            players: PlayerPair::new(|id| Player::new(id, starting_life)),
            active_player: PlayerId::FIRST,
            turn_number: 1,
            phase: Phase::Main,
            attacking_cards: OrdSet::new(),
            defender_assignments: OrdMap::new(),
            ids: InstanceIdAllocator::new(),
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    /// The player who is not taking this turn.
    #[must_use]
    pub fn defending(&self) -> &Player {
        &self.players[self.active_player.opponent()]
    }

    /// Report the game result implied by life totals, if any.
    ///
    /// The engine never stops play on its own; hosts call this after each
    /// operation if they enforce the loss condition.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        let alive: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| p.life > 0)
            .map(|(id, _)| id)
            .collect();

        match alive.as_slice() {
            [] => Some(GameResult::Draw),
            [winner] => Some(GameResult::Winner(*winner)),
            _ => None,
        }
    }

    /// Check the structural invariants every operation must preserve.
    ///
    /// Returns a description of each broken invariant; empty means healthy.
    #[must_use]
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (id, player) in self.players.iter() {
            if player.available_mana > player.total_mana {
                problems.push(format!(
                    "{id}: available mana {} exceeds total {}",
                    player.available_mana, player.total_mana
                ));
            }
        }

        let attacker_field = &self.active().battlefield;
        let defender_field = &self.defending().battlefield;

        for &attacker in &self.attacking_cards {
            if !attacker_field.get(attacker).is_some_and(|c| c.is_creature()) {
                problems.push(format!("attacker {attacker} is not an active-player creature"));
            }
        }

        for (&defender, &attacker) in &self.defender_assignments {
            if !defender_field.get(defender).is_some_and(|c| c.is_creature()) {
                problems.push(format!("defender {defender} is not a defending-player creature"));
            }
            if !self.attacking_cards.contains(&attacker) {
                problems.push(format!("defender {defender} blocks non-attacker {attacker}"));
            }
        }

        if self.phase == Phase::Main
            && (!self.attacking_cards.is_empty() || !self.defender_assignments.is_empty())
        {
            problems.push("combat declarations left over in Main phase".to_string());
        }

        problems
    }

    /// Encode this snapshot as bytes for an external collaborator.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    ///
    /// Rejects snapshots that decode but break structure: a seat holding
    /// the other player's record, or any `invariant_violations`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;

        if let Some((seat, player)) = state.players.iter().find(|(seat, p)| p.id != *seat) {
            return Err(SnapshotError::Malformed(format!(
                "{seat} holds the record of {}",
                player.id
            )));
        }
        if let Some(problem) = state.invariant_violations().into_iter().next() {
            return Err(SnapshotError::Malformed(problem));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKey, CardKind};

    fn card(id: u32) -> CardInstance {
        CardInstance::new(
            InstanceId(id),
            CardKey::new("bear"),
            "Bear",
            CardKind::Creature {
                cost: 2,
                attack: 2,
                defense: 2,
            },
        )
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(20);

        assert_eq!(state.turn_number, 1);
        assert_eq!(state.phase, Phase::Main);
        assert_eq!(state.active_player, PlayerId::FIRST);
        assert_eq!(state.active().life, 20);
        assert_eq!(state.defending().id, PlayerId::SECOND);
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn test_draw_from_front() {
        let mut player = Player::new(PlayerId::FIRST, 20);
        player.deck = (1..=3).map(card).collect();

        assert_eq!(player.draw(), Some(InstanceId(1)));
        assert_eq!(player.hand.len(), 1);
        assert_eq!(player.deck.len(), 2);
        assert_eq!(player.deck[0].id, InstanceId(2));
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut player = Player::new(PlayerId::FIRST, 20);

        assert_eq!(player.draw(), None);
        assert!(player.hand.is_empty());
    }

    #[test]
    fn test_take_from_hand() {
        let mut player = Player::new(PlayerId::FIRST, 20);
        player.hand = (1..=3).map(card).collect();

        let taken = player.take_from_hand(1).unwrap();
        assert_eq!(taken.id, InstanceId(2));
        assert_eq!(player.hand.len(), 2);
        assert!(player.take_from_hand(5).is_none());
    }

    #[test]
    fn test_outcome() {
        let mut state = GameState::new(20);
        assert_eq!(state.outcome(), None);

        state.player_mut(PlayerId::SECOND).life = -1;
        assert_eq!(state.outcome(), Some(GameResult::Winner(PlayerId::FIRST)));

        state.player_mut(PlayerId::FIRST).life = 0;
        assert_eq!(state.outcome(), Some(GameResult::Draw));
    }

    #[test]
    fn test_invariant_violations_detected() {
        let mut state = GameState::new(20);
        state.player_mut(PlayerId::FIRST).available_mana = 2;
        state.attacking_cards.insert(InstanceId(42));

        let problems = state.invariant_violations();
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_snapshot_rejects_bad_seat() {
        let bytes = GameState::new(20).to_bytes().unwrap();
        // The first encoded byte is the first player's seat
        assert_eq!(bytes[0], 0);

        let mut third_seat = bytes.clone();
        third_seat[0] = 2;
        assert!(matches!(
            GameState::from_bytes(&third_seat),
            Err(SnapshotError::Codec(_))
        ));

        let mut swapped = bytes;
        swapped[0] = 1;
        assert!(matches!(
            GameState::from_bytes(&swapped),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_broken_invariants() {
        let mut state = GameState::new(20);
        state.player_mut(PlayerId::SECOND).available_mana = 4;

        let bytes = state.to_bytes().unwrap();

        assert!(matches!(
            GameState::from_bytes(&bytes),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = GameState::new(20);
        state.player_mut(PlayerId::FIRST).hand.push_back(card(1));
        state.player_mut(PlayerId::SECOND).battlefield.insert(card(2));

        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(state, restored);
    }
}
