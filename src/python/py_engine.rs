//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::engine::{CheckOutcome, Engine, SkipOutcome};

use super::py_core::PySnapshot;

/// Python wrapper for Engine.
///
/// Every intent returns the snapshot it produced.
#[pyclass(name = "Engine")]
pub struct PyEngine {
    engine: Engine,
}

#[pymethods]
impl PyEngine {
    /// Create an engine over the built-in vocabulary and start a session.
    ///
    /// # Arguments
    /// - max_rounds: Words per session
    /// - score_increment: Points per correct guess
    /// - seed: RNG seed, or None for a random session
    #[new]
    #[pyo3(signature = (
        max_rounds = crate::core::MAX_ROUNDS,
        score_increment = crate::core::SCORE_INCREMENT,
        seed = None
    ))]
    fn new(max_rounds: u32, score_increment: u32, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::new()
            .with_max_rounds(max_rounds)
            .with_score_increment(score_increment);
        config.seed = seed;

        let engine = Engine::builtin(config)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(Self { engine })
    }

    fn start(&mut self) -> PySnapshot {
        self.engine.start();
        self.snapshot()
    }

    fn update_guess(&mut self, text: String) -> PySnapshot {
        self.engine.update_guess(text);
        self.snapshot()
    }

    /// Check the current guess. Returns True when it was correct.
    fn check(&mut self) -> bool {
        self.engine.check() == CheckOutcome::Correct
    }

    /// Skip the current word. Returns True when the session just ended.
    fn skip(&mut self) -> bool {
        self.engine.skip() == SkipOutcome::Finished
    }

    fn replay(&mut self) -> PySnapshot {
        self.engine.replay();
        self.snapshot()
    }

    fn snapshot(&self) -> PySnapshot {
        PySnapshot(self.engine.snapshot())
    }

    /// Highest score reachable this session.
    #[getter]
    fn total_score(&self) -> u32 {
        self.engine.config().total_score()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.engine.seed()
    }
}
