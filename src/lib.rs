//! # mana-duel
//!
//! Rules engine for a two-player mana/creature card game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Snapshots Out**: Every operation takes a complete
//!    `GameState` and returns a new one. A rejected command leaves the
//!    input untouched and reports a typed `RuleViolation`.
//!
//! 2. **Persistent Data Structures**: Zones are `im` collections, so a new
//!    snapshot per operation shares everything that did not change.
//!
//! 3. **Deterministic Decks**: Shuffling goes through a seedable `GameRng`.
//!    The same catalog and seed always deal the same game.
//!
//! ## Game Flow
//!
//! Each turn runs Main, then optionally Attack and Defense. In Main the
//! active player plays at most one mana card and any creatures they can
//! pay for. Attackers are declared in Attack, blockers in Defense, and
//! ending Defense resolves combat and passes the turn.
//!
//! ## Modules
//!
//! - `core`: IDs, players, state, commands, errors, RNG, configuration
//! - `cards`: Card definitions, instances, and the catalog
//! - `zones`: Battlefield container and deck construction
//! - `rules`: `RulesEngine` trait, `DuelRules`, mana and combat
//! - `session`: `GameSession`, command history, and observers

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CardRef, CatalogError, Command, CommandRecord, GameConfig, GameRng, GameState, InstanceId,
    InstanceIdAllocator, Phase, Player, PlayerId, PlayerPair, RuleViolation, SnapshotError,
    TurnNumbering,
};

pub use crate::cards::{Archetype, CardCatalog, CardDefinition, CardInstance, CardKey, CardKind};

pub use crate::zones::{build_deck, Battlefield};

pub use crate::rules::{CombatReport, DuelRules, GameResult, RulesEngine};

pub use crate::session::{GameSession, StateObserver};

// Python bindings (optional)
#[cfg(feature = "python")]
pub mod python;
