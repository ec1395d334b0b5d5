//! Core types: configuration, cards, deck, phases, RNG, errors.
//!
//! Everything here is plain data. The state machine that drives it lives
//! in `engine`.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod phase;
pub mod rng;

pub use card::{Card, CardFace, CardPosition};
pub use config::{GridConfig, Timing};
pub use deck::Deck;
pub use error::{ConfigError, GameError};
pub use phase::{Outcome, Phase, SessionId};
pub use rng::{GameRng, GameRngState};
