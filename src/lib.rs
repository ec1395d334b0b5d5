//! # match-grid
//!
//! A memory-matching ("concentration") card game engine.
//!
//! A grid of face-down cards, paired by hidden value, is revealed two at a
//! time. Matching pairs stay face up, mismatches flip back after a short
//! delay, and a countdown runs until every pair is found or time expires.
//!
//! ## Design Principles
//!
//! 1. **Engine-Owned State**: Deck, counters, timer and phase live in the
//!    engine. Rendering is a one-way projection pushed to a `Renderer`.
//!
//! 2. **Timers as Data**: Ticks and flip-resolution delays are `TimerEvent`
//!    values scheduled through a `Clock` and handed back to the engine.
//!    Every scheduled timer has a cancellable `TimerToken`.
//!
//! 3. **Session Generations**: Each start opens a new `SessionId`. Events
//!    from an earlier session are rejected, never applied.
//!
//! 4. **Deterministic**: Decks come from a seeded ChaCha8 stream, so games
//!    replay exactly under a `VirtualClock`.
//!
//! ## Modules
//!
//! - `core`: Configuration, cards, deck, phases, RNG, errors
//! - `clock`: Clock capability and the virtual clock
//! - `render`: Renderer capability and bundled renderers
//! - `engine`: The `MatchGrid` state machine

pub mod core;
pub mod clock;
pub mod render;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, CardFace, CardPosition, Deck,
    GridConfig, Timing,
    Phase, Outcome, SessionId,
    GameRng, GameRngState,
    ConfigError, GameError,
};

pub use crate::clock::{Clock, TimerEvent, TimerToken, VirtualClock};

pub use crate::render::{
    format_clock, BoardView, FlipDirection, Renderer, StatusReport,
    NullRenderer, RecordingRenderer, RenderCommand, TextRenderer,
};

pub use crate::engine::{FlipOutcome, IgnoreReason, MatchGrid, SessionSnapshot, TickOutcome};
