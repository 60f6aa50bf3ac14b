//! Core engine types: ids, players, state, commands, RNG, configuration.

pub mod command;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use command::{Command, CommandRecord};
pub use config::{GameConfig, TurnNumbering};
pub use entity::{InstanceId, InstanceIdAllocator};
pub use error::{CardRef, CatalogError, RuleViolation, SnapshotError};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use state::{GameState, Phase, Player};
