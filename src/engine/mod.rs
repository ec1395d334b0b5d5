//! The game engine.
//!
//! [`MatchGrid`] owns the session and reacts to three kinds of input:
//! pointer calls (`flip`, `set_paused`, `start`, `reset`), countdown ticks,
//! and the one-shot flip-resolution delays it schedules itself. Each
//! handler runs to completion; nothing here is shared across threads.
//!
//! ## Example Usage
//!
//! ```
//! use match_grid::clock::VirtualClock;
//! use match_grid::core::{GridConfig, Phase};
//! use match_grid::engine::{FlipOutcome, MatchGrid};
//! use match_grid::render::RecordingRenderer;
//!
//! let config = GridConfig::new(2, 2, 10);
//! let mut grid = MatchGrid::new(config, RecordingRenderer::new(), VirtualClock::new(), 42).unwrap();
//! grid.start().unwrap();
//!
//! for value in 1..=2 {
//!     let (a, b) = grid.deck().pair_positions(value).unwrap();
//!     grid.flip(a).unwrap();
//!     assert!(matches!(grid.flip(b).unwrap(), FlipOutcome::Matched { .. }));
//! }
//!
//! // The win is declared after the match display delay.
//! grid.advance(500);
//! assert_eq!(grid.phase(), Phase::Won);
//! assert_eq!(grid.move_count(), 2);
//! ```

mod grid;
mod outcome;

pub use grid::MatchGrid;
pub use outcome::{FlipOutcome, IgnoreReason, SessionSnapshot, TickOutcome};
