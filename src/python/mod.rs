//! Python bindings for the match-grid engine.
//!
//! The engine is driven by a virtual clock; Python decides how fast time
//! passes by calling `advance`.
//!
//! # Quick Start
//!
//! ```python
//! import match_grid as mg
//!
//! grid = mg.MatchGrid(rows=2, columns=4, time_limit=60, seed=42)
//! grid.start()
//!
//! grid.flip(0)
//! grid.flip(5)
//! grid.advance(1000)   # a mismatch flips back after one second
//!
//! obs = grid.observation()  # numpy int64 vector
//! ```

use pyo3::prelude::*;

mod py_grid;

pub use py_grid::*;

/// match_grid: a memory-matching card game engine.
#[pymodule]
fn match_grid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchGrid>()?;
    Ok(())
}
