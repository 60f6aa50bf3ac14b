//! Python bindings for the mana-duel rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import mana_duel
//!
//! catalog = open("cards.json").read()
//! duel = mana_duel.Duel(catalog, seed=42)
//!
//! duel.play_card(0, 0)
//! duel.enter_attack_phase()
//! print(duel.phase, duel.life(1))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_duel;

pub use py_core::*;
pub use py_duel::*;

/// mana_duel: a two-player mana/creature card game engine.
#[pymodule]
fn mana_duel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyDuel>()?;
    Ok(())
}
