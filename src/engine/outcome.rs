//! Results of engine operations and session snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{CardFace, CardPosition, GameRngState, Phase, SessionId};

/// Why a flip changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The card is already matched.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyFlipped,
    /// Two cards are face up and waiting to resolve.
    PairPending,
}

/// Result of a `flip()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// No state change.
    Ignored(IgnoreReason),

    /// First card of a pair attempt turned face up.
    Revealed,

    /// Second card matched the first. `pairs_left` is zero when the board
    /// is complete and the win is scheduled.
    Matched {
        pair: [CardPosition; 2],
        pairs_left: u16,
    },

    /// Second card differs; both flip back after the mismatch delay.
    Mismatched { pair: [CardPosition; 2] },
}

/// Result of a `tick()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Paused, or the board is complete and the win is pending.
    Held,
    /// One second elapsed.
    Counted { remaining: u32 },
    /// Time ran out; the session is lost.
    Expired,
}

/// Serializable view of a session.
///
/// Pair-values are only included for face-up cards. `rng` is the stream
/// state the deck was shuffled from; restoring it rebuilds the same deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    pub phase: Phase,
    pub match_count: u16,
    pub move_count: u32,
    pub time_remaining: u32,
    pub paused: bool,
    pub faces: Vec<CardFace>,
    pub visible_values: Vec<Option<u16>>,
    pub rng: GameRngState,
}
