//! MatchGrid bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::clock::VirtualClock;
use crate::core::{CardFace, CardPosition, GameRng, GridConfig, Outcome, Phase, Timing};
use crate::engine::{FlipOutcome, MatchGrid};
use crate::render::RecordingRenderer;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for MatchGrid.
///
/// Uses a virtual clock; call `advance(ms)` to let time pass.
#[pyclass(name = "MatchGrid")]
pub struct PyMatchGrid {
    grid: MatchGrid<RecordingRenderer, VirtualClock>,
}

#[pymethods]
impl PyMatchGrid {
    /// Create an idle game.
    ///
    /// # Arguments
    /// - rows, columns: board size (even card count, each at least 2)
    /// - time_limit: countdown in seconds
    /// - seed: RNG seed for deterministic decks; None seeds from the OS
    /// - match_delay_ms, mismatch_delay_ms: flip-resolution delays
    #[new]
    #[pyo3(signature = (
        rows = 4,
        columns = 4,
        time_limit = 60,
        seed = None,
        match_delay_ms = 500,
        mismatch_delay_ms = 1000
    ))]
    fn new(
        rows: u32,
        columns: u32,
        time_limit: u32,
        seed: Option<u64>,
        match_delay_ms: u64,
        mismatch_delay_ms: u64,
    ) -> PyResult<Self> {
        let config = GridConfig::new(rows, columns, time_limit).with_timing(Timing {
            match_delay_ms,
            mismatch_delay_ms,
            ..Timing::default()
        });
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let grid = MatchGrid::with_rng(config, RecordingRenderer::new(), VirtualClock::new(), rng)
            .map_err(value_error)?;
        Ok(Self { grid })
    }

    /// Shuffle and start the countdown.
    fn start(&mut self) -> PyResult<()> {
        self.grid.renderer_mut().drain();
        self.grid.start().map_err(value_error)
    }

    /// Flip the card at `position`.
    ///
    /// Returns one of "ignored", "revealed", "matched", "mismatched".
    fn flip(&mut self, position: u32) -> PyResult<&'static str> {
        let outcome = self
            .grid
            .flip(CardPosition::new(position))
            .map_err(value_error)?;
        Ok(match outcome {
            FlipOutcome::Ignored(_) => "ignored",
            FlipOutcome::Revealed => "revealed",
            FlipOutcome::Matched { .. } => "matched",
            FlipOutcome::Mismatched { .. } => "mismatched",
        })
    }

    fn set_paused(&mut self, paused: bool) {
        self.grid.set_paused(paused);
    }

    /// Start a fresh session after a win or loss.
    fn reset(&mut self) -> PyResult<()> {
        self.grid.renderer_mut().drain();
        self.grid.reset().map_err(value_error)
    }

    /// Give up the current session.
    fn forfeit(&mut self) -> PyResult<()> {
        self.grid.finish(Outcome::Lost).map_err(value_error)
    }

    /// Let `ms` milliseconds of virtual time pass.
    ///
    /// Returns the number of timer events delivered.
    fn advance(&mut self, ms: u64) -> usize {
        self.grid.advance(ms)
    }

    /// Board observation: 0 for hidden, pair-value for flipped,
    /// negative pair-value for matched.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        let obs: Vec<i64> = self
            .grid
            .deck()
            .iter()
            .map(|card| match card.face {
                CardFace::Hidden => 0,
                CardFace::Flipped => i64::from(card.value),
                CardFace::Matched => -i64::from(card.value),
            })
            .collect();
        PyArray1::from_vec_bound(py, obs)
    }

    /// Current phase: "idle", "playing", "won" or "lost".
    #[getter]
    fn phase(&self) -> String {
        self.grid.phase().to_string()
    }

    #[getter]
    fn is_over(&self) -> bool {
        matches!(self.grid.phase(), Phase::Won | Phase::Lost)
    }

    #[getter]
    fn match_count(&self) -> u16 {
        self.grid.match_count()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.grid.move_count()
    }

    #[getter]
    fn time_remaining(&self) -> u32 {
        self.grid.time_remaining()
    }

    #[getter]
    fn paused(&self) -> bool {
        self.grid.is_paused()
    }

    /// Seed of the shuffle stream, for replaying a session.
    #[getter]
    fn seed(&self) -> u64 {
        self.grid.snapshot().rng.seed
    }

    #[getter]
    fn card_count(&self) -> usize {
        self.grid.config().card_count()
    }

    /// Latest status message, if the session has ended.
    fn status_message(&self) -> Option<String> {
        self.grid.renderer().last_status().map(|s| s.message())
    }

    fn __len__(&self) -> usize {
        self.grid.deck().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchGrid({}x{}, phase={}, matches={}, moves={}, time={})",
            self.grid.config().rows,
            self.grid.config().columns,
            self.grid.phase(),
            self.grid.match_count(),
            self.grid.move_count(),
            self.grid.time_remaining()
        )
    }
}
