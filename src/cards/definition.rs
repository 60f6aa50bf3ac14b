//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable base stats the catalog supplies.
//! `CardKind` is the archetype-specific view derived from those stats once,
//! when a deck is built, and stored on every instance from then on.

use serde::{Deserialize, Serialize};

/// Stable catalog identifier for a card definition (e.g. `"goblin_raider"`).
///
/// Identifies the printed card, not a specific copy in a game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardKey(pub String);

impl CardKey {
    /// Create a new card key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Mana,
    Creature,
}

/// Archetype-specific card data.
///
/// Mana cards carry no combat stats; creatures carry no resource value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Resource card: adds `resource_value` to the mana pool when played.
    Mana { resource_value: u32 },
    /// Combat card: paid for with mana, fights with attack/defense.
    Creature { cost: u32, attack: u32, defense: u32 },
}

impl CardKind {
    /// The archetype tag of this kind.
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        match self {
            CardKind::Mana { .. } => Archetype::Mana,
            CardKind::Creature { .. } => Archetype::Creature,
        }
    }

    /// Check if this is a creature.
    #[must_use]
    pub fn is_creature(&self) -> bool {
        matches!(self, CardKind::Creature { .. })
    }

    /// Printed attack, or `None` for mana cards.
    #[must_use]
    pub fn attack(&self) -> Option<u32> {
        match self {
            CardKind::Creature { attack, .. } => Some(*attack),
            CardKind::Mana { .. } => None,
        }
    }

    /// Printed defense, or `None` for mana cards.
    #[must_use]
    pub fn defense(&self) -> Option<u32> {
        match self {
            CardKind::Creature { defense, .. } => Some(*defense),
            CardKind::Mana { .. } => None,
        }
    }
}

/// Static card definition as supplied by the catalog.
///
/// ## Example
///
/// ```
/// use mana_duel::cards::{Archetype, CardDefinition};
///
/// let forest = CardDefinition::new("forest", 0, 1, 0, 0);
/// let bear = CardDefinition::new("bear", 2, 0, 2, 2);
///
/// assert_eq!(forest.archetype(), Archetype::Mana);
/// assert_eq!(bear.archetype(), Archetype::Creature);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog identifier.
    pub key: CardKey,

    /// Display name. Defaults to the key.
    pub name: String,

    pub cost: u32,
    pub resource_value: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CardDefinition {
    /// Create a definition whose display name is its key.
    #[must_use]
    pub fn new(
        key: impl Into<CardKey>,
        cost: u32,
        resource_value: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        let key = key.into();
        Self {
            name: key.0.clone(),
            key,
            cost,
            resource_value,
            attack,
            defense,
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Derive the archetype from base stats.
    ///
    /// Mana iff `resource_value == 1` and every other stat is zero.
    #[must_use]
    pub fn archetype(&self) -> Archetype {
        if self.resource_value == 1 && self.cost == 0 && self.attack == 0 && self.defense == 0 {
            Archetype::Mana
        } else {
            Archetype::Creature
        }
    }

    /// Derive the archetype-specific kind.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self.archetype() {
            Archetype::Mana => CardKind::Mana {
                resource_value: self.resource_value,
            },
            Archetype::Creature => CardKind::Creature {
                cost: self.cost,
                attack: self.attack,
                defense: self.defense,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mana_derivation() {
        let card = CardDefinition::new("island", 0, 1, 0, 0);
        assert_eq!(card.kind(), CardKind::Mana { resource_value: 1 });
        assert_eq!(card.kind().attack(), None);
    }

    #[test]
    fn test_near_mana_is_creature() {
        // Any non-zero combat stat or cost makes it a creature
        for card in [
            CardDefinition::new("a", 1, 1, 0, 0),
            CardDefinition::new("b", 0, 1, 1, 0),
            CardDefinition::new("c", 0, 1, 0, 1),
            CardDefinition::new("d", 0, 2, 0, 0),
            CardDefinition::new("e", 0, 0, 0, 0),
        ] {
            assert_eq!(card.archetype(), Archetype::Creature, "{}", card.key);
        }
    }

    #[test]
    fn test_creature_kind_drops_resource() {
        let card = CardDefinition::new("knight", 3, 1, 3, 2);
        assert_eq!(
            card.kind(),
            CardKind::Creature {
                cost: 3,
                attack: 3,
                defense: 2
            }
        );
        assert!(card.kind().is_creature());
    }

    #[test]
    fn test_name_defaults_to_key() {
        let card = CardDefinition::new("elf", 1, 0, 1, 1);
        assert_eq!(card.name, "elf");

        let card = card.with_name("Llanowar Elf");
        assert_eq!(card.name, "Llanowar Elf");
        assert_eq!(card.key.as_str(), "elf");
    }
}
