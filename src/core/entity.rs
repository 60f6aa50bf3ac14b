//! Card instance identification.
//!
//! Every physical card in a game (deck card, hand card, battlefield card)
//! carries an `InstanceId` that is unique for the lifetime of the game.
//!
//! ## Allocation
//!
//! IDs come from an `InstanceIdAllocator` owned by the game state, never from
//! a process-wide counter. Two games never share an allocator, so games stay
//! independent and tests stay deterministic.
//!
//! ```
//! use mana_duel::core::InstanceIdAllocator;
//!
//! let mut ids = InstanceIdAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert!(b > a);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one game.
///
/// IDs are never reused: a card that moves from hand to battlefield is
/// re-issued a new ID, and a destroyed card's ID is retired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic per-game ID source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdAllocator {
    next: u32,
}

impl InstanceIdAllocator {
    /// Create an allocator starting at ID 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh ID.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}
