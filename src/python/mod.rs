//! Python bindings for the unscramble engine.
//!
//! # Quick Start
//!
//! ```python
//! import unscramble
//!
//! engine = unscramble.Engine(seed=42)
//! snap = engine.snapshot()
//! print(snap.scrambled_word, "-", snap.definition)
//!
//! engine.update_guess(snap.current_word)
//! assert engine.check()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// unscramble: a word-unscrambling game engine.
#[pymodule]
fn unscramble(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngine>()?;
    m.add_class::<PySnapshot>()?;

    m.add("SCORE_INCREMENT", crate::core::SCORE_INCREMENT)?;
    m.add("MAX_ROUNDS", crate::core::MAX_ROUNDS)?;
    m.add("TOTAL_SCORE", crate::core::TOTAL_SCORE)?;

    Ok(())
}
