//! Lockout countdown for the blocked login panel. `Countdown` is the pure
//! remaining-time math; `LockoutTimer` samples it once per second and fires
//! an unlock callback exactly once when the deadline passes. Exactly one
//! timer runs per blocked panel; dropping the timer cancels the interval, so
//! tying it to component cleanup guarantees no orphaned callbacks.

use super::rate_limit::{Clock, SystemClock};
use gloo_timers::callback::Interval;
use std::cell::Cell;

/// Sampling cadence for the countdown display.
pub const TICK_MS: u32 = 1_000;

/// Remaining-time view over a lockout deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub blocked_until: u64,
    pub lock_duration: u64,
}

impl Countdown {
    pub fn new(blocked_until: u64, lock_duration: u64) -> Self {
        Self {
            blocked_until,
            lock_duration,
        }
    }

    /// Milliseconds until unlock, clamped at zero.
    pub fn remaining_ms(&self, now: u64) -> u64 {
        self.blocked_until.saturating_sub(now)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.remaining_ms(now) == 0
    }

    /// Share of the lockout still remaining for a sampled remaining time,
    /// clamped to `0..=100`.
    pub fn progress_percent(&self, remaining_ms: u64) -> f64 {
        if self.lock_duration == 0 {
            return 0.0;
        }
        let fraction = remaining_ms as f64 / self.lock_duration as f64;
        (fraction * 100.0).clamp(0.0, 100.0)
    }
}

/// Formats a remaining duration as `m:ss` for the countdown display.
pub fn format_remaining(remaining_ms: u64) -> String {
    let total_seconds = remaining_ms / 1_000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// One-second interval driving a countdown until its deadline passes.
///
/// The unlock callback fires at most once, from a tick; a deadline that is
/// already in the past never fires it when the timer is torn down before the
/// first tick. Dropping the handle cancels the interval.
pub struct LockoutTimer {
    _interval: Interval,
}

impl LockoutTimer {
    pub fn start(
        countdown: Countdown,
        on_tick: impl Fn(u64) + 'static,
        on_unlock: impl Fn() + 'static,
    ) -> Self {
        let fired = Cell::new(false);
        let interval = Interval::new(TICK_MS, move || {
            if fired.get() {
                return;
            }
            let now = SystemClock.now_ms();
            on_tick(countdown.remaining_ms(now));
            if countdown.is_expired(now) {
                fired.set(true);
                on_unlock();
            }
        });

        Self {
            _interval: interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Countdown, format_remaining};
    use crate::features::auth::rate_limit::LOCKOUT_WINDOW_MS;

    #[test]
    fn remaining_decreases_and_clamps_at_zero() {
        let countdown = Countdown::new(LOCKOUT_WINDOW_MS, LOCKOUT_WINDOW_MS);

        assert_eq!(countdown.remaining_ms(0), LOCKOUT_WINDOW_MS);
        assert_eq!(countdown.remaining_ms(45_000), LOCKOUT_WINDOW_MS - 45_000);
        assert_eq!(countdown.remaining_ms(LOCKOUT_WINDOW_MS), 0);
        assert_eq!(countdown.remaining_ms(LOCKOUT_WINDOW_MS + 5_000), 0);
        assert!(countdown.is_expired(LOCKOUT_WINDOW_MS));
        assert!(!countdown.is_expired(LOCKOUT_WINDOW_MS - 1));
    }

    #[test]
    fn progress_percent_is_clamped() {
        let countdown = Countdown::new(LOCKOUT_WINDOW_MS, LOCKOUT_WINDOW_MS);

        assert_eq!(countdown.progress_percent(LOCKOUT_WINDOW_MS), 100.0);
        assert_eq!(countdown.progress_percent(LOCKOUT_WINDOW_MS / 2), 50.0);
        assert_eq!(countdown.progress_percent(0), 0.0);
        assert_eq!(countdown.progress_percent(LOCKOUT_WINDOW_MS * 2), 100.0);
    }

    #[test]
    fn progress_percent_handles_zero_duration() {
        let countdown = Countdown::new(1_000, 0);
        assert_eq!(countdown.progress_percent(0), 0.0);
    }

    #[test]
    fn format_remaining_renders_minutes_and_padded_seconds() {
        assert_eq!(format_remaining(LOCKOUT_WINDOW_MS), "2:00");
        assert_eq!(format_remaining(119_000), "1:59");
        assert_eq!(format_remaining(61_000), "1:01");
        assert_eq!(format_remaining(9_500), "0:09");
        assert_eq!(format_remaining(0), "0:00");
    }
}
