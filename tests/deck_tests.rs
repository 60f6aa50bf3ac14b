//! Deck construction tests.
//!
//! These tests verify the deck builder end to end:
//! - One instance per catalog entry, with unique IDs across both decks
//! - Archetypes derived from catalog stats
//! - Seeded shuffles reproduce, different seeds diverge

use mana_duel::cards::{Archetype, CardCatalog, CardDefinition};
use mana_duel::core::{GameConfig, GameRng, GameState, InstanceIdAllocator, PlayerId};
use mana_duel::rules::DuelRules;
use mana_duel::zones::build_deck;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn catalog(mana: usize, creatures: usize) -> CardCatalog {
    let lands = (0..mana).map(|i| CardDefinition::new(format!("land-{i}"), 0, 1, 0, 0));
    let beasts = (0..creatures)
        .map(|i| CardDefinition::new(format!("beast-{i}"), 1 + i as u32 % 3, 0, 1 + i as u32, 2));
    lands.chain(beasts).collect()
}

fn all_cards(state: &GameState, seat: PlayerId) -> Vec<mana_duel::CardInstance> {
    let player = state.player(seat);
    player.hand.iter().chain(player.deck.iter()).cloned().collect()
}

/// Test that a catalog loaded from JSON deals a full game.
#[test]
fn test_json_catalog_deals_game() {
    let catalog = CardCatalog::from_json(
        r#"{
            "forest": { "cost": 0, "resources": 1, "attack": 0, "defense": 0 },
            "swamp": { "cost": 0, "resources": 1, "attack": 0, "defense": 0 },
            "bear": {
                "name": "Grizzly Bear",
                "cost": 2, "resources": 0, "attack": 2, "defense": 2
            },
            "goblin": { "cost": 1, "resources": 0, "attack": 1, "defense": 1 }
        }"#,
    )
    .unwrap();

    let state = DuelRules::default().new_game(&catalog, &mut GameRng::new(42)).unwrap();

    for seat in PlayerId::both() {
        let player = state.player(seat);
        assert_eq!(player.hand.len(), 3);
        assert_eq!(player.deck.len(), 1);

        let names: FxHashSet<_> = all_cards(&state, seat).into_iter().map(|c| c.name).collect();
        assert!(names.contains("Grizzly Bear"));
        assert!(names.contains("forest"));
    }
}

/// Test that malformed catalogs are rejected before any deck is built.
#[test]
fn test_invalid_catalogs_rejected() {
    let missing = CardCatalog::from_json(r#"{ "bear": { "cost": 2, "attack": 2, "defense": 2 } }"#);
    assert!(matches!(
        missing,
        Err(mana_duel::CatalogError::MissingField { field: "resources", .. })
    ));

    let negative = CardCatalog::from_json(
        r#"{ "bear": { "cost": -1, "resources": 0, "attack": 2, "defense": 2 } }"#,
    );
    assert!(matches!(
        negative,
        Err(mana_duel::CatalogError::NegativeValue { value: -1, .. })
    ));

    assert!(matches!(CardCatalog::from_json("{}"), Err(mana_duel::CatalogError::Empty)));
    assert!(matches!(CardCatalog::from_json("[1, 2]"), Err(mana_duel::CatalogError::Json(_))));
}

/// Test that a non-mana card with resource value 1 still counts as a creature.
#[test]
fn test_mixed_stats_are_creatures() {
    let catalog: CardCatalog = vec![
        CardDefinition::new("land", 0, 1, 0, 0),
        CardDefinition::new("mana-beast", 0, 1, 1, 1),
        CardDefinition::new("wall", 0, 0, 0, 3),
    ]
    .into_iter()
    .collect();

    let deck = build_deck(&catalog, &mut InstanceIdAllocator::new(), &mut GameRng::new(3));

    let mana = deck.iter().filter(|c| c.archetype() == Archetype::Mana).count();
    assert_eq!(mana, 1);
    assert_eq!(deck.len(), 3);
}

/// Test that seeds drive the shuffle.
#[test]
fn test_seeded_shuffle() {
    let catalog = catalog(6, 10);
    let rules = DuelRules::new(GameConfig::new().with_starting_hand_size(0));

    let a = rules.new_game(&catalog, &mut GameRng::new(9)).unwrap();
    let b = rules.new_game(&catalog, &mut GameRng::new(9)).unwrap();
    let c = rules.new_game(&catalog, &mut GameRng::new(10)).unwrap();

    assert_eq!(a, b);
    let keys =
        |s: &GameState| -> Vec<_> { s.active().deck.iter().map(|c| c.key.clone()).collect() };
    assert_ne!(keys(&a), keys(&c));
}

proptest! {
    /// Every deck holds one instance per catalog entry with IDs unique
    /// across both players, and the archetype split matches the catalog.
    #[test]
    fn prop_decks_mirror_catalog(mana in 0usize..6, creatures in 0usize..8, seed in any::<u64>()) {
        prop_assume!(mana + creatures > 0);
        let catalog = catalog(mana, creatures);

        let state = DuelRules::default().new_game(&catalog, &mut GameRng::new(seed)).unwrap();

        let mut ids = FxHashSet::default();
        for seat in PlayerId::both() {
            let cards = all_cards(&state, seat);
            prop_assert_eq!(cards.len(), mana + creatures);
            prop_assert_eq!(state.player(seat).hand.len(), 3.min(mana + creatures));

            let mana_cards = cards.iter().filter(|c| c.archetype() == Archetype::Mana).count();
            prop_assert_eq!(mana_cards, mana);

            for card in &cards {
                prop_assert!(ids.insert(card.id), "duplicate id {}", card.id);
                prop_assert!(!card.tapped);
            }
        }
        prop_assert_eq!(state.ids.issued() as usize, ids.len());
    }
}
