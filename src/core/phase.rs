//! Game phases and session identity.
//!
//! ```text
//! idle --start--> playing --finish(won)--> won  --reset--> playing
//!                         --finish(lost)-> lost --reset--> playing
//! ```
//!
//! Every `start()` opens a new `SessionId`. Timer events capture the id
//! when they are scheduled and are discarded if it no longer matches.

use serde::{Deserialize, Serialize};

/// Coarse game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, waiting for the first start.
    #[default]
    Idle,
    /// Cards can be flipped and the timer is running.
    Playing,
    /// Every pair was matched.
    Won,
    /// Time ran out.
    Lost,
}

impl Phase {
    /// Is this a terminal phase (won or lost)?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    /// Can `start()` be called from this phase?
    #[must_use]
    pub fn can_start(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// The terminal phase for this outcome.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
        }
    }
}

/// Monotonically increasing session identifier.
///
/// `SessionId(0)` is never handed to a timer event; the first `start()`
/// opens session 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The id of the session after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::Idle.can_start());
        assert!(!Phase::Playing.can_start());
        assert!(Phase::Won.can_start());
        assert!(Phase::Lost.can_start());

        assert!(!Phase::Idle.is_terminal());
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
    }

    #[test]
    fn test_outcome_phase() {
        assert_eq!(Outcome::Won.phase(), Phase::Won);
        assert_eq!(Outcome::Lost.phase(), Phase::Lost);
    }

    #[test]
    fn test_session_ids_increase() {
        let first = SessionId::default().next();
        assert_eq!(first, SessionId(1));
        assert!(first.next() > first);
        assert_eq!(format!("{}", first), "Session(1)");
    }
}
