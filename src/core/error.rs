//! Error types.
//!
//! - `ConfigError`: raised while validating a `GridConfig`. Fatal for
//!   construction, no engine is created.
//! - `GameError`: raised by engine operations called in a phase that
//!   forbids them, with an out-of-range position, or by a timer event
//!   that belongs to an earlier session.

use thiserror::Error;

use super::card::CardPosition;
use super::phase::{Phase, SessionId};

/// Invalid board dimensions, time limit or timing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least 2 rows, got {0}")]
    TooFewRows(u32),

    #[error("board needs at least 2 columns, got {0}")]
    TooFewColumns(u32),

    #[error("board of {rows}x{columns} has an odd number of cards")]
    OddCardCount { rows: u32, columns: u32 },

    #[error("board has {0} pairs, more than a pair-value can hold")]
    TooManyPairs(u64),

    #[error("time limit must be at least 1 second")]
    ZeroTimeLimit,

    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,

    #[error("invalid config document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is structurally illegal in the current phase.
    #[error("cannot {operation} while {phase}")]
    InvalidOperation {
        operation: &'static str,
        phase: Phase,
    },

    /// The position does not index a card on the board.
    #[error("{position} is outside a board of {card_count} cards")]
    PositionOutOfRange {
        position: CardPosition,
        card_count: usize,
    },

    /// A timer event fired for a session that has since ended or been reset.
    #[error("timer event from {found} discarded, current session is {expected}")]
    StaleCallback {
        expected: SessionId,
        found: SessionId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidOperation {
            operation: "flip",
            phase: Phase::Idle,
        };
        assert_eq!(err.to_string(), "cannot flip while idle");

        let err = GameError::PositionOutOfRange {
            position: CardPosition::new(9),
            card_count: 4,
        };
        assert_eq!(err.to_string(), "Card(9) is outside a board of 4 cards");

        let err = ConfigError::OddCardCount { rows: 3, columns: 3 };
        assert_eq!(err.to_string(), "board of 3x3 has an odd number of cards");
    }

    #[test]
    fn test_parse_error_conversion() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let config_err: ConfigError = err.into();
        assert!(matches!(config_err, ConfigError::Parse(_)));
    }
}
