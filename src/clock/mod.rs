//! Clock capability: periodic ticks and one-shot delays.
//!
//! The engine never sleeps or spawns threads. It asks a `Clock` to deliver
//! a `TimerEvent` later and keeps the returned `TimerToken` so it can cancel
//! it. Whoever drives the clock hands due events back to
//! `MatchGrid::on_timer`.
//!
//! Events are plain data carrying the `SessionId` they were scheduled in,
//! so an event that outlives its session is recognized and discarded.
//!
//! ## Example Usage
//!
//! ```
//! use match_grid::clock::{Clock, TimerEvent, VirtualClock};
//! use match_grid::core::SessionId;
//!
//! let mut clock = VirtualClock::new();
//! let session = SessionId(1);
//! let token = clock.schedule_interval(1000, TimerEvent::Tick { session });
//!
//! assert_eq!(clock.pop_due(999), None);
//! assert_eq!(clock.pop_due(1000), Some(TimerEvent::Tick { session }));
//!
//! assert!(clock.cancel(token));
//! assert_eq!(clock.pop_due(5000), None);
//! ```

mod virtual_clock;

pub use virtual_clock::VirtualClock;

use serde::{Deserialize, Serialize};

use crate::core::{CardPosition, SessionId};

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// One countdown period elapsed.
    Tick { session: SessionId },

    /// The last pair was matched and the win display delay elapsed.
    ConfirmWin { session: SessionId },

    /// A mismatched pair should flip back face down.
    RevertMismatch {
        session: SessionId,
        positions: [CardPosition; 2],
    },
}

impl TimerEvent {
    /// The session this event was scheduled in.
    #[must_use]
    pub const fn session(&self) -> SessionId {
        match *self {
            TimerEvent::Tick { session }
            | TimerEvent::ConfirmWin { session }
            | TimerEvent::RevertMismatch { session, .. } => session,
        }
    }
}

/// Scheduling capability consumed by the engine.
///
/// Implementations decide how time passes: a browser host wraps its
/// interval/timeout API, tests and bindings use [`VirtualClock`].
pub trait Clock {
    /// Deliver `event` every `period_ms` until cancelled.
    fn schedule_interval(&mut self, period_ms: u64, event: TimerEvent) -> TimerToken;

    /// Deliver `event` once after `delay_ms`.
    fn schedule_once(&mut self, delay_ms: u64, event: TimerEvent) -> TimerToken;

    /// Stop a timer. Returns `false` if it had already fired or was unknown.
    fn cancel(&mut self, token: TimerToken) -> bool;
}
