//! Game driver: owns the current session and its 1-second clock.
//!
//! The driver is the only place where wall-clock time meets the session. It
//! is polled from a single-threaded loop:
//!
//! 1. Block on input for at most [`GameDriver::time_until_next_tick`]
//! 2. Forward any user action with [`GameDriver::apply`]
//! 3. Call [`GameDriver::poll`] to fire a due tick
//!
//! The tick schedule is disarmed once the session completes and permanently
//! after [`GameDriver::shutdown`] (or drop), so no tick outlives its session.

use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::core::{Session, SessionSnapshot};
use crate::types::{GameAction, GameStatus, TICK_MS};

/// Single-threaded owner of a [`Session`] and its tick schedule
#[derive(Debug)]
pub struct GameDriver<C: Clock = SystemClock> {
    clock: C,
    session: Session,
    /// Deadline of the next tick; `None` while the clock is stopped.
    next_tick_at: Option<Instant>,
    tick_interval: Duration,
    shut_down: bool,
}

impl GameDriver<SystemClock> {
    /// Deal a game from `config` on the system clock.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> GameDriver<C> {
    pub fn new(config: &EngineConfig, clock: C) -> Self {
        Self::with_session(config.new_session(), clock)
    }

    pub fn with_session(session: Session, clock: C) -> Self {
        let now = clock.now();
        let mut driver = Self {
            clock,
            session,
            next_tick_at: None,
            tick_interval: Duration::from_millis(TICK_MS as u64),
            shut_down: false,
        };
        driver.sync_schedule(now);
        driver
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether a tick is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.next_tick_at.is_some()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Apply a user action. Returns whether the session changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.shut_down {
            tracing::debug!(?action, "ignoring action after shutdown");
            return false;
        }

        let now = self.clock.now();
        let next = self.session.apply_action(action, now);
        let changed = next != self.session;
        self.session = next;
        self.sync_schedule(now);
        changed
    }

    /// Fire the tick if it is due. Returns whether the session changed.
    ///
    /// At most one tick fires per call. If the loop fell behind by more than a
    /// whole interval, the missed ticks are dropped rather than replayed.
    pub fn poll(&mut self) -> bool {
        if self.shut_down {
            return false;
        }
        let Some(due) = self.next_tick_at else {
            return false;
        };

        let now = self.clock.now();
        if now < due {
            return false;
        }

        let next = self.session.tick(now);
        let changed = next != self.session;
        self.session = next;

        if self.session.status() == GameStatus::Completed {
            self.stop_clock();
        } else {
            let mut following = due + self.tick_interval;
            if following <= now {
                following = now + self.tick_interval;
            }
            self.next_tick_at = Some(following);
        }

        changed
    }

    /// How long until the next tick is due (`None` if the clock is stopped).
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.next_tick_at
            .map(|due| due.saturating_duration_since(self.clock.now()))
    }

    /// Stop the clock for good. Later polls and actions are ignored.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.next_tick_at = None;
        tracing::debug!(
            status = self.session.status().as_str(),
            "driver shut down"
        );
    }

    /// Arm the clock for a live session, stop it for a completed one.
    fn sync_schedule(&mut self, now: Instant) {
        if self.session.status() == GameStatus::Completed {
            self.stop_clock();
        } else if self.next_tick_at.is_none() {
            self.next_tick_at = Some(now + self.tick_interval);
            tracing::debug!("clock started");
        }
    }

    fn stop_clock(&mut self) {
        if self.next_tick_at.take().is_some() {
            tracing::debug!(
                elapsed_seconds = self.session.elapsed_seconds(),
                "clock stopped"
            );
        }
    }
}

impl<C: Clock> Drop for GameDriver<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::core::Deck;

    fn driver() -> (GameDriver<ManualClock>, ManualClock) {
        // Face value n at positions 2n-2 and 2n-1.
        let deck = Deck::from_face_values(&[1, 1, 2, 2]).unwrap();
        let clock = ManualClock::new();
        let d = GameDriver::with_session(Session::from_deck(deck), clock.clone());
        (d, clock)
    }

    #[test]
    fn tick_fires_once_per_second() {
        let (mut d, clock) = driver();
        d.apply(GameAction::ToggleRunning);
        assert_eq!(d.time_until_next_tick(), Some(Duration::from_secs(1)));

        clock.advance_ms(999);
        assert!(!d.poll());
        assert_eq!(d.session().elapsed_seconds(), 0);

        clock.advance_ms(1);
        assert!(d.poll());
        assert_eq!(d.session().elapsed_seconds(), 1);
        assert_eq!(d.time_until_next_tick(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn missed_ticks_are_not_replayed() {
        let (mut d, clock) = driver();
        d.apply(GameAction::ToggleRunning);

        clock.advance_ms(5_500);
        assert!(d.poll());
        assert!(!d.poll());
        assert_eq!(d.session().elapsed_seconds(), 1);
        assert_eq!(d.time_until_next_tick(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn idle_ticks_change_nothing() {
        let (mut d, clock) = driver();
        clock.advance_ms(1000);
        assert!(!d.poll());
        assert!(d.is_ticking());
        assert_eq!(d.session().status(), GameStatus::Idle);
    }

    #[test]
    fn completion_stops_the_clock() {
        let (mut d, clock) = driver();
        d.apply(GameAction::ToggleRunning);
        d.apply(GameAction::Flip(0));
        d.apply(GameAction::Flip(1));
        d.apply(GameAction::Flip(2));
        assert!(d.is_ticking());
        d.apply(GameAction::Flip(3));

        assert_eq!(d.session().status(), GameStatus::Completed);
        assert!(!d.is_ticking());
        assert_eq!(d.time_until_next_tick(), None);

        clock.advance_ms(10_000);
        assert!(!d.poll());
        assert_eq!(d.session().elapsed_seconds(), 0);
    }

    #[test]
    fn starting_after_completion_rearms_the_clock() {
        let (mut d, clock) = driver();
        d.apply(GameAction::ToggleRunning);
        for p in 0..4 {
            d.apply(GameAction::Flip(p));
        }
        assert!(!d.is_ticking());

        assert!(d.apply(GameAction::ToggleRunning));
        assert_eq!(d.session().status(), GameStatus::Playing);
        assert_eq!(d.session().moves(), 0);
        assert!(d.is_ticking());

        clock.advance_ms(1000);
        assert!(d.poll());
        assert_eq!(d.session().elapsed_seconds(), 1);
    }

    #[test]
    fn shutdown_ignores_everything_after() {
        let (mut d, clock) = driver();
        d.apply(GameAction::ToggleRunning);
        d.shutdown();
        d.shutdown();

        assert!(d.is_shut_down());
        assert!(!d.is_ticking());
        clock.advance_ms(3000);
        assert!(!d.poll());
        assert!(!d.apply(GameAction::Flip(0)));
        assert_eq!(d.session().elapsed_seconds(), 0);
        assert!(d.session().flipped().is_empty());
    }

    #[test]
    fn apply_reports_noop() {
        let (mut d, _clock) = driver();
        // Idle: clicks are ignored.
        assert!(!d.apply(GameAction::Flip(0)));
        assert!(d.apply(GameAction::ToggleRunning));
        assert!(d.apply(GameAction::Flip(0)));
        assert!(!d.apply(GameAction::Flip(0)));
    }

    #[test]
    fn mismatch_unflips_on_a_later_tick() {
        let (mut d, clock) = driver();
        d.apply(GameAction::ToggleRunning);
        clock.advance_ms(200);
        d.apply(GameAction::Flip(0));
        d.apply(GameAction::Flip(2));

        // Ticks at 1.2s and 2.2s: pair shown for 1.0s and 2.0s.
        for _ in 0..2 {
            clock.advance_ms(1000);
            d.poll();
        }
        // Tick at 3.2s: shown for 3.0s > 2.5s.
        assert_eq!(d.session().flipped().len(), 2);
        clock.advance_ms(1000);
        assert!(d.poll());
        assert!(d.session().flipped().is_empty());
        assert_eq!(d.session().elapsed_seconds(), 3);
    }
}
