//! The match-grid state machine.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::outcome::{FlipOutcome, IgnoreReason, SessionSnapshot, TickOutcome};
use crate::clock::{Clock, TimerEvent, TimerToken, VirtualClock};
use crate::core::{
    CardFace, CardPosition, ConfigError, Deck, GameError, GameRng, GameRngState, GridConfig,
    Outcome, Phase, SessionId,
};
use crate::render::{format_clock, BoardView, FlipDirection, Renderer, StatusReport};

/// A memory-matching game over a `rows` x `columns` board.
///
/// Owns every piece of session state. Pushes a projection of it to the
/// renderer `R` and schedules its timers through the clock `C`. Timer
/// events come back through [`on_timer`](Self::on_timer).
pub struct MatchGrid<R: Renderer, C: Clock> {
    config: GridConfig,
    renderer: R,
    clock: C,
    rng: GameRng,

    deck: Deck,
    /// RNG state the current deck was shuffled from.
    deck_rng: GameRngState,
    /// Face-up cards of the current, unresolved pair attempt.
    active_flips: SmallVec<[CardPosition; 2]>,
    match_count: u16,
    move_count: u32,
    time_remaining: u32,
    paused: bool,
    phase: Phase,
    session: SessionId,

    ticker: Option<TimerToken>,
    pending_win: Option<TimerToken>,
    pending_revert: Option<TimerToken>,
}

impl<R: Renderer, C: Clock> MatchGrid<R, C> {
    /// Create an idle game with a seeded RNG.
    ///
    /// Fails if the config is invalid; no game is created in that case.
    pub fn new(config: GridConfig, renderer: R, clock: C, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, renderer, clock, GameRng::new(seed))
    }

    /// Create an idle game with an existing RNG stream.
    pub fn with_rng(
        config: GridConfig,
        renderer: R,
        clock: C,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            time_remaining: config.time_limit,
            config,
            renderer,
            clock,
            deck_rng: rng.state(),
            rng,
            deck: Deck::default(),
            active_flips: SmallVec::new(),
            match_count: 0,
            move_count: 0,
            paused: false,
            phase: Phase::Idle,
            session: SessionId::default(),
            ticker: None,
            pending_win: None,
            pending_revert: None,
        })
    }

    // === Operations ===

    /// Shuffle a fresh deck and start the countdown.
    ///
    /// Allowed from idle, won or lost.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.phase.can_start() {
            return Err(self.reject("start"));
        }

        self.cancel_timers();
        self.session = self.session.next();
        self.deck_rng = self.rng.state();
        self.deck = Deck::shuffled(self.config.pair_count(), &mut self.rng);
        self.active_flips.clear();
        self.match_count = 0;
        self.move_count = 0;
        self.time_remaining = self.config.time_limit;
        self.paused = false;
        self.phase = Phase::Playing;

        self.renderer.clear_board();
        self.renderer.render_board(&self.board());
        self.renderer.render_timer(&format_clock(self.time_remaining));

        let tick = TimerEvent::Tick {
            session: self.session,
        };
        let token = self.clock.schedule_interval(self.config.timing.tick_ms, tick);
        self.ticker = Some(token);
        debug!(%token, period_ms = self.config.timing.tick_ms, "countdown scheduled");

        info!(
            session = %self.session,
            rows = self.config.rows,
            columns = self.config.columns,
            time_limit = self.config.time_limit,
            "session started"
        );
        Ok(())
    }

    /// Turn a card face up.
    ///
    /// Matched cards, face-up cards and a third card while a pair is
    /// pending are ignored without any state change. The second card of
    /// an attempt is compared immediately and counts as one move.
    pub fn flip(&mut self, position: CardPosition) -> Result<FlipOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Err(self.reject("flip"));
        }

        let card = *self.deck.get(position).ok_or(GameError::PositionOutOfRange {
            position,
            card_count: self.deck.len(),
        })?;

        let ignored = match card.face {
            CardFace::Matched => Some(IgnoreReason::AlreadyMatched),
            CardFace::Flipped => Some(IgnoreReason::AlreadyFlipped),
            CardFace::Hidden if self.active_flips.len() >= 2 => Some(IgnoreReason::PairPending),
            CardFace::Hidden => None,
        };
        if let Some(reason) = ignored {
            debug!(%position, ?reason, "flip ignored");
            return Ok(FlipOutcome::Ignored(reason));
        }

        self.deck.set_face(position, CardFace::Flipped);
        self.active_flips.push(position);
        self.renderer.animate_flip(position, FlipDirection::Reveal);
        debug!(%position, value = card.value, "card revealed");

        let outcome = if self.active_flips.len() == 2 {
            self.compare()
        } else {
            FlipOutcome::Revealed
        };

        self.renderer.render_board(&self.board());
        Ok(outcome)
    }

    /// Count down one second.
    ///
    /// Holds while paused, and while the completed board waits for its win
    /// confirmation. Reaching zero finishes the session as lost.
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Err(self.reject("tick"));
        }
        if self.tick_held() {
            debug!(paused = self.paused, "tick held");
            return Ok(TickOutcome::Held);
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.renderer.render_timer(&format_clock(self.time_remaining));
        debug!(remaining = self.time_remaining, "tick");

        if self.time_remaining == 0 {
            self.finish(Outcome::Lost)?;
            return Ok(TickOutcome::Expired);
        }

        Ok(TickOutcome::Counted {
            remaining: self.time_remaining,
        })
    }

    /// Suspend or resume the countdown.
    ///
    /// Only gates `tick()`; flip-resolution delays keep running.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, session = %self.session, "pause changed");
        }
        self.paused = paused;
    }

    /// End the session.
    ///
    /// Cancels the countdown and any pending delays, then shows the status.
    pub fn finish(&mut self, outcome: Outcome) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(self.reject("finish"));
        }

        self.cancel_timers();
        self.phase = outcome.phase();

        let status = StatusReport {
            won: outcome == Outcome::Won,
            moves: self.move_count,
        };
        self.renderer.clear_timer();
        self.renderer.render_status(&status);

        info!(
            session = %self.session,
            outcome = ?outcome,
            moves = self.move_count,
            matches = self.match_count,
            time_remaining = self.time_remaining,
            "session finished"
        );
        Ok(())
    }

    /// Clear the finished board and immediately start a new session.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if !self.phase.is_terminal() {
            return Err(self.reject("reset"));
        }

        self.deck.hide_all();
        self.active_flips.clear();
        self.match_count = 0;
        self.start()
    }

    /// Apply a timer event delivered by the clock.
    ///
    /// Events scheduled in an earlier session are rejected unapplied.
    pub fn on_timer(&mut self, event: TimerEvent) -> Result<(), GameError> {
        if event.session() != self.session {
            warn!(
                expected = %self.session,
                found = %event.session(),
                ?event,
                "stale timer event discarded"
            );
            return Err(GameError::StaleCallback {
                expected: self.session,
                found: event.session(),
            });
        }

        match event {
            TimerEvent::Tick { .. } => self.tick().map(|_| ()),
            TimerEvent::ConfirmWin { .. } => {
                self.pending_win = None;
                self.finish(Outcome::Won)
            }
            TimerEvent::RevertMismatch { positions, .. } => {
                self.pending_revert = None;
                self.revert(positions)
            }
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The current deck. Empty until the first start.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Positions flipped in the current, unresolved attempt.
    #[must_use]
    pub fn active_flips(&self) -> &[CardPosition] {
        &self.active_flips
    }

    #[must_use]
    pub fn match_count(&self) -> u16 {
        self.match_count
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Is the countdown interval scheduled?
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Board projection as handed to the renderer.
    #[must_use]
    pub fn board(&self) -> BoardView {
        BoardView::new(self.config.rows, self.config.columns, self.deck.cards())
    }

    /// Serializable view of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.session,
            phase: self.phase,
            match_count: self.match_count,
            move_count: self.move_count,
            time_remaining: self.time_remaining,
            paused: self.paused,
            faces: self.deck.iter().map(|c| c.face).collect(),
            visible_values: self.deck.iter().map(|c| c.visible_value()).collect(),
            rng: self.deck_rng.clone(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    // === Internals ===

    fn board_complete(&self) -> bool {
        self.match_count == self.config.pair_count()
    }

    fn tick_held(&self) -> bool {
        self.paused || self.board_complete()
    }

    fn compare(&mut self) -> FlipOutcome {
        let pair = [self.active_flips[0], self.active_flips[1]];
        let values = pair.map(|p| self.deck.get(p).map(|c| c.value));
        self.move_count += 1;

        if values[0] == values[1] {
            for position in pair {
                self.deck.set_face(position, CardFace::Matched);
            }
            self.active_flips.clear();
            self.match_count += 1;

            let pairs_left = self.config.pair_count() - self.match_count;
            debug!(?pair, pairs_left, moves = self.move_count, "pair matched");

            if pairs_left == 0 {
                let event = TimerEvent::ConfirmWin {
                    session: self.session,
                };
                let token = self
                    .clock
                    .schedule_once(self.config.timing.match_delay_ms, event);
                self.pending_win = Some(token);
                debug!(
                    %token,
                    delay_ms = self.config.timing.match_delay_ms,
                    "win confirmation scheduled"
                );
            }
            FlipOutcome::Matched { pair, pairs_left }
        } else {
            debug!(?pair, moves = self.move_count, "pair mismatched");
            let event = TimerEvent::RevertMismatch {
                session: self.session,
                positions: pair,
            };
            let token = self
                .clock
                .schedule_once(self.config.timing.mismatch_delay_ms, event);
            self.pending_revert = Some(token);
            debug!(
                %token,
                delay_ms = self.config.timing.mismatch_delay_ms,
                "revert scheduled"
            );
            FlipOutcome::Mismatched { pair }
        }
    }

    fn revert(&mut self, positions: [CardPosition; 2]) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(self.reject("revert a mismatch"));
        }

        for position in positions {
            let flipped = self.deck.get(position).is_some_and(|c| c.is_flipped());
            if flipped {
                self.deck.set_face(position, CardFace::Hidden);
                self.renderer.animate_flip(position, FlipDirection::Conceal);
            }
        }
        self.active_flips.retain(|p| !positions.contains(&*p));

        debug!(?positions, "mismatch reverted");
        self.renderer.render_board(&self.board());
        Ok(())
    }

    fn cancel_timers(&mut self) {
        let tokens = [
            self.ticker.take(),
            self.pending_win.take(),
            self.pending_revert.take(),
        ];
        for token in tokens.into_iter().flatten() {
            self.clock.cancel(token);
        }
    }

    fn reject(&self, operation: &'static str) -> GameError {
        warn!(operation, phase = %self.phase, "operation not allowed in this phase");
        GameError::InvalidOperation {
            operation,
            phase: self.phase,
        }
    }
}

impl<R: Renderer> MatchGrid<R, VirtualClock> {
    /// Move virtual time forward, delivering due events one at a time.
    ///
    /// An event that ends the session cancels the countdown before any
    /// later tick in the same advance is released. Rejected events are
    /// logged and dropped. Returns the number of events delivered.
    ///
    /// A held tick stays held for the rest of the advance, so the countdown
    /// jumps past `until` after the first one instead of firing every period.
    /// Time saturates at `u64::MAX`.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let until = self.clock.now_ms().saturating_add(elapsed_ms);
        let mut delivered = 0;

        while let Some(event) = self.clock.pop_due(until) {
            delivered += 1;
            if let Err(err) = self.on_timer(event) {
                debug!(%err, "timer event dropped");
                continue;
            }

            let held = matches!(event, TimerEvent::Tick { .. })
                && self.phase == Phase::Playing
                && self.tick_held();
            if let (true, Some(token)) = (held, self.ticker) {
                self.clock.skip_interval(token, until);
            }
        }

        self.clock.advance_to(until);
        delivered
    }
}
