//! Deterministic clock driven by explicit time advances.

use rustc_hash::FxHashMap;

use super::{Clock, TimerEvent, TimerToken};

#[derive(Clone, Debug)]
struct Scheduled {
    due_ms: u64,
    /// Scheduling order, breaks ties between timers due at the same time.
    seq: u64,
    period_ms: Option<u64>,
    event: TimerEvent,
}

/// Virtual millisecond clock.
///
/// Time only moves when the owner calls [`pop_due`](Self::pop_due) or
/// [`advance_to`](Self::advance_to). Events come out in due-time order,
/// ties in scheduling order. Intervals are rescheduled as they fire.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    next_token: u64,
    next_seq: u64,
    timers: FxHashMap<TimerToken, Scheduled>,
}

impl VirtualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Is the timer still scheduled?
    #[must_use]
    pub fn is_scheduled(&self, token: TimerToken) -> bool {
        self.timers.contains_key(&token)
    }

    /// Release the next event due at or before `until_ms`.
    ///
    /// Moves the clock to that event's due time. Returns `None` when nothing
    /// is due; the clock is left where it was.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerEvent> {
        let token = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(token, _)| *token)?;

        let seq = self.next_seq;
        let timer = self.timers.get_mut(&token)?;
        let event = timer.event;
        self.now_ms = self.now_ms.max(timer.due_ms);

        // An interval whose next due time is past u64::MAX can never fire again.
        match timer.period_ms.and_then(|period| timer.due_ms.checked_add(period)) {
            Some(next_due) => {
                timer.due_ms = next_due;
                timer.seq = seq;
                self.next_seq += 1;
            }
            None => {
                self.timers.remove(&token);
            }
        }

        Some(event)
    }

    /// Move an interval's next firing past `until_ms` without releasing it.
    ///
    /// Keeps the interval's phase. Drops the interval if its next firing
    /// would be past u64::MAX. One-shot timers are left alone.
    pub fn skip_interval(&mut self, token: TimerToken, until_ms: u64) {
        let Some(timer) = self.timers.get_mut(&token) else {
            return;
        };
        let Some(period) = timer.period_ms else {
            return;
        };
        if timer.due_ms > until_ms {
            return;
        }

        let periods = (until_ms - timer.due_ms) / period + 1;
        let next_due = periods
            .checked_mul(period)
            .and_then(|offset| timer.due_ms.checked_add(offset));
        match next_due {
            Some(due_ms) => timer.due_ms = due_ms,
            None => {
                self.timers.remove(&token);
            }
        }
    }

    /// Move the clock forward without releasing anything.
    ///
    /// Never moves time backwards.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn insert(&mut self, delay_ms: u64, period_ms: Option<u64>, event: TimerEvent) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;

        let scheduled = Scheduled {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
            period_ms,
            event,
        };
        self.next_seq += 1;

        self.timers.insert(token, scheduled);
        token
    }
}

impl Clock for VirtualClock {
    fn schedule_interval(&mut self, period_ms: u64, event: TimerEvent) -> TimerToken {
        let period = period_ms.max(1);
        self.insert(period, Some(period), event)
    }

    fn schedule_once(&mut self, delay_ms: u64, event: TimerEvent) -> TimerToken {
        self.insert(delay_ms, None, event)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        self.timers.remove(&token).is_some()
    }
}
