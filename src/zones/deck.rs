//! Deck construction.
//!
//! `build_deck` prints one instance of every catalog entry, derives each
//! instance's `CardKind` exactly once, and shuffles the result.

use im::Vector;

use crate::cards::{CardCatalog, CardInstance};
use crate::core::entity::InstanceIdAllocator;
use crate::core::rng::GameRng;

/// Build a shuffled deck with one fresh instance per catalog entry.
///
/// The front of the returned sequence is the next card drawn.
///
/// ## Example
///
/// ```
/// use mana_duel::cards::{CardCatalog, CardDefinition};
/// use mana_duel::core::{GameRng, InstanceIdAllocator};
/// use mana_duel::zones::build_deck;
///
/// let catalog: CardCatalog = vec![
///     CardDefinition::new("forest", 0, 1, 0, 0),
///     CardDefinition::new("bear", 2, 0, 2, 2),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut ids = InstanceIdAllocator::new();
/// let deck = build_deck(&catalog, &mut ids, &mut GameRng::new(7));
/// assert_eq!(deck.len(), 2);
/// ```
pub fn build_deck(
    catalog: &CardCatalog,
    ids: &mut InstanceIdAllocator,
    rng: &mut GameRng,
) -> Vector<CardInstance> {
    let mut cards: Vec<CardInstance> = catalog
        .iter_sorted()
        .map(|def| CardInstance::new(ids.alloc(), def.key.clone(), def.name.clone(), def.kind()))
        .collect();

    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}
