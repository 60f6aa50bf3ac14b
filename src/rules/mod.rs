//! Game rules.
//!
//! - `engine`: `RulesEngine` trait and `GameResult`
//! - `duel`: `DuelRules`, the phase state machine and every operation
//! - `mana`: card play and the one-resource-per-turn economy
//! - `combat`: pure combat resolver
//! - `turn`: turn-end procedure
//! - `phase`: phase and active-player gating

pub mod combat;
pub mod duel;
pub mod engine;
pub mod mana;
pub mod phase;
pub mod turn;

pub use combat::CombatReport;
pub use duel::DuelRules;
pub use engine::{GameResult, RulesEngine};
