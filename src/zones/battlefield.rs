//! Battlefield zone.
//!
//! A set of card instances keyed by `InstanceId`. IDs are allocated
//! monotonically, so key order is also the order cards entered play, which
//! gives presentation code a stable layout.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::entity::InstanceId;

/// One player's battlefield.
///
/// Backed by a persistent map, so cloning a game state is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    cards: OrdMap<InstanceId, CardInstance>,
}

impl Battlefield {
    /// Create an empty battlefield.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card into play.
    pub fn insert(&mut self, card: CardInstance) {
        self.cards.insert(card.id, card);
    }

    /// Remove a card permanently. Returns the removed card.
    pub fn remove(&mut self, id: InstanceId) -> Option<CardInstance> {
        self.cards.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in the order they entered play.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }

    /// Iterate over untapped creatures.
    pub fn ready_creatures(&self) -> impl Iterator<Item = &CardInstance> {
        self.iter().filter(|c| c.is_ready_creature())
    }

    /// Check if any untapped creature is in play.
    #[must_use]
    pub fn has_ready_creature(&self) -> bool {
        self.ready_creatures().next().is_some()
    }

    /// Untap every card.
    pub fn untap_all(&mut self) {
        let tapped: Vec<InstanceId> = self.iter().filter(|c| c.tapped).map(|c| c.id).collect();
        for id in tapped {
            if let Some(card) = self.cards.get_mut(&id) {
                card.tapped = false;
            }
        }
    }
}
