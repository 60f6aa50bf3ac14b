//! Card catalog for definition lookup and JSON ingestion.
//!
//! The `CardCatalog` maps a stable `CardKey` to its `CardDefinition`.
//! Catalog JSON is validated here, so malformed entries never reach the
//! deck builder.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "forest":  { "cost": 0, "resources": 1, "attack": 0, "defense": 0 },
//!   "bear":    { "name": "Grizzly Bear", "cost": 2, "resources": 0, "attack": 2, "defense": 2 }
//! }
//! ```
//!
//! `resourceValue` and `resource_value` are accepted as aliases of `resources`.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{CardDefinition, CardKey};
use crate::core::error::CatalogError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use mana_duel::cards::{CardCatalog, CardDefinition, CardKey};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(CardDefinition::new("bear", 2, 0, 2, 2));
///
/// let found = catalog.get(&CardKey::new("bear")).unwrap();
/// assert_eq!(found.attack, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardKey, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, RawCardEntry> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut catalog = Self::new();
        for (key, entry) in raw {
            let definition = entry.validate(key)?;
            catalog.insert(definition);
        }

        log::debug!("loaded card catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Insert a definition, replacing any previous entry with the same key.
    ///
    /// Returns the replaced definition.
    pub fn insert(&mut self, card: CardDefinition) -> Option<CardDefinition> {
        self.cards.insert(card.key.clone(), card)
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&CardDefinition> {
        self.cards.get(key)
    }

    /// Check if a key is present.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in key order.
    ///
    /// Key order makes seeded deck building reproducible.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &CardDefinition> {
        let mut cards: Vec<_> = self.cards.values().collect();
        cards.sort_by(|a, b| a.key.cmp(&b.key));
        cards.into_iter()
    }
}

impl FromIterator<CardDefinition> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.insert(card);
        }
        catalog
    }
}

/// Unvalidated catalog entry as it appears in JSON.
#[derive(Deserialize)]
struct RawCardEntry {
    #[serde(default)]
    name: Option<String>,
    cost: Option<i64>,
    #[serde(alias = "resourceValue", alias = "resource_value")]
    resources: Option<i64>,
    attack: Option<i64>,
    defense: Option<i64>,
}

impl RawCardEntry {
    fn validate(self, key: String) -> Result<CardDefinition, CatalogError> {
        let stat = |value: Option<i64>, field: &'static str| -> Result<u32, CatalogError> {
            let value = value.ok_or_else(|| CatalogError::MissingField {
                card: key.clone(),
                field,
            })?;
            if value < 0 {
                return Err(CatalogError::NegativeValue {
                    card: key.clone(),
                    field,
                    value,
                });
            }
            u32::try_from(value).map_err(|_| CatalogError::OutOfRange {
                card: key.clone(),
                field,
                value,
            })
        };

        let cost = stat(self.cost, "cost")?;
        let resources = stat(self.resources, "resources")?;
        let attack = stat(self.attack, "attack")?;
        let defense = stat(self.defense, "defense")?;

        let definition =
            CardDefinition::new(CardKey::new(key.clone()), cost, resources, attack, defense);
        Ok(match self.name {
            Some(name) => definition.with_name(name),
            None => definition,
        })
    }
}
