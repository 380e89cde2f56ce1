//! Snapshot bindings for Python.

use std::sync::Arc;

use pyo3::prelude::*;

use crate::engine::Snapshot;

/// Read-only Python view of a snapshot.
#[pyclass(name = "Snapshot", frozen)]
#[derive(Clone, Debug)]
pub struct PySnapshot(pub Arc<Snapshot>);

#[pymethods]
impl PySnapshot {
    #[getter]
    fn current_word(&self) -> String {
        self.0.current_word.clone()
    }

    #[getter]
    fn scrambled_word(&self) -> String {
        self.0.scrambled_word.clone()
    }

    #[getter]
    fn definition(&self) -> String {
        self.0.definition.clone()
    }

    /// Words presented this session, sorted for stable output.
    #[getter]
    fn used_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.0.used_words.iter().cloned().collect();
        words.sort();
        words
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn round_number(&self) -> u32 {
        self.0.round_number
    }

    #[getter]
    fn max_rounds(&self) -> u32 {
        self.0.max_rounds
    }

    #[getter]
    fn guess_input(&self) -> String {
        self.0.guess_input.clone()
    }

    #[getter]
    fn guess_is_invalid(&self) -> bool {
        self.0.guess_is_invalid
    }

    #[getter]
    fn is_session_over(&self) -> bool {
        self.0.is_session_over
    }

    fn __repr__(&self) -> String {
        format!(
            "Snapshot(round={}/{}, score={}, scrambled={:?}, over={})",
            self.0.round_number,
            self.0.max_rounds,
            self.0.score,
            self.0.scrambled_word,
            self.0.is_session_over
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
