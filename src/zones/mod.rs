//! Zones: deck, hand, battlefield.
//!
//! - Deck: ordered `im::Vector`, front is the next draw
//! - Hand: ordered `im::Vector`, order is display order only
//! - Battlefield: `Battlefield` set keyed by instance ID
//!
//! There is no graveyard container: destroyed cards are dropped.

pub mod battlefield;
pub mod deck;

pub use battlefield::Battlefield;
pub use deck::build_deck;
