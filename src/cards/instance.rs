//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical card in one zone. Its `kind` was derived
//! from the catalog definition when the deck was built and is never mutated;
//! combat works on transient shadow values instead.

use serde::{Deserialize, Serialize};

use super::definition::{Archetype, CardKey, CardKind};
use crate::core::entity::InstanceId;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this instance.
    pub id: InstanceId,

    /// Catalog definition this card was printed from.
    pub key: CardKey,

    /// Display name.
    pub name: String,

    /// Base stats, fixed for the life of the instance.
    pub kind: CardKind,

    /// Tapped cards cannot be declared as new attackers or defenders.
    pub tapped: bool,

    /// Declared as an attacker this combat.
    pub attacking: bool,

    /// Attacker this card is blocking this combat.
    pub defending_target: Option<InstanceId>,
}

impl CardInstance {
    /// Create an untapped instance.
    #[must_use]
    pub fn new(id: InstanceId, key: CardKey, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            key,
            name: name.into(),
            kind,
            tapped: false,
            attacking: false,
            defending_target: None,
        }
    }

    /// Re-issue this card under a new ID with fresh runtime state.
    ///
    /// Used when a card moves from hand to battlefield.
    #[must_use]
    pub fn reissue(&self, id: InstanceId) -> Self {
        Self::new(id, self.key.clone(), self.name.clone(), self.kind)
    }

    /// The archetype stored on this instance.
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.kind.archetype()
    }

    /// Check if this is a creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.kind.is_creature()
    }

    /// Check if this is an untapped creature.
    #[must_use]
    pub fn is_ready_creature(&self) -> bool {
        self.is_creature() && !self.tapped
    }

    /// Clear combat markers.
    pub fn clear_combat(&mut self) {
        self.attacking = false;
        self.defending_target = None;
    }
}
