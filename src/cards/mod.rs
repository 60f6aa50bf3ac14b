//! Card system: definitions, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardKey`: Stable catalog identifier
//! - `CardDefinition`: Immutable base stats from the catalog
//! - `CardKind`: Mana or creature, derived once at deck construction
//! - `CardInstance`: One physical card with its runtime flags
//! - `CardCatalog`: Validated definition lookup

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{Archetype, CardDefinition, CardKey, CardKind};
pub use instance::CardInstance;
