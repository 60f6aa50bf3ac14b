//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{PlayerId, RuleViolation};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a seat from its 0-based index.
    #[new]
    fn new(index: usize) -> PyResult<Self> {
        PlayerId::from_index(index)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("no seat {index} in a duel")))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.index())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

pub(crate) fn seat(index: usize) -> PyResult<PlayerId> {
    PlayerId::from_index(index)
        .ok_or_else(|| PyValueError::new_err(format!("no seat {index} in a duel")))
}

pub(crate) fn rejected(violation: RuleViolation) -> PyErr {
    PyValueError::new_err(violation.to_string())
}
