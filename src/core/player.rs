//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A duel has exactly two seats: `PlayerId::FIRST` (index 0) and
//! `PlayerId::SECOND` (index 1).
//!
//! ## PlayerPair
//!
//! Fixed two-element storage indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier for one of the two players.
///
/// Deserialization rejects any seat other than 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who takes the first turn.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a seat index.
    ///
    /// Panics if `index > 1`. Use `from_index` for untrusted input.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 2, "A duel has exactly two seats");
        Self(index)
    }

    /// Create a player ID from an untrusted seat index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::FIRST),
            1 => Some(Self::SECOND),
            _ => None,
        }
    }

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use mana_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(index)).ok_or_else(|| format!("no seat {index} in a duel"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat storage for exactly two players.
///
/// ## Example
///
/// ```
/// use mana_duel::core::{PlayerId, PlayerPair};
///
/// let mut life: PlayerPair<i64> = PlayerPair::with_value(20);
/// life[PlayerId::SECOND] -= 3;
///
/// assert_eq!(life[PlayerId::FIRST], 20);
/// assert_eq!(life[PlayerId::SECOND], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
