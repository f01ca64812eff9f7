//! Client-side login attempt governor. Tracks consecutive failures per
//! identity (the normalized email) and locks an identity out for a fixed
//! window after too many failures, independent of what the server decides.
//! The ledger is process-local and performs no I/O; the flow controller owns
//! the durable localStorage mirror. Cross-tab writers are not coordinated.

use std::collections::HashMap;

/// Consecutive failures that trigger a lockout.
pub const MAX_ATTEMPTS: u32 = 5;
/// Lockout window in milliseconds. Also the quiet period after which a
/// non-blocked failure count goes stale and resets.
pub const LOCKOUT_WINDOW_MS: u64 = 2 * 60 * 1000;

/// Per-identity attempt state. Deleted entirely on a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRecord {
    pub attempts: u32,
    pub last_attempt_at: u64,
    pub blocked_until: Option<u64>,
}

/// Millisecond clock, injectable so tests can drive time by hand.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock: `Date.now()` in the browser, `SystemTime` natively.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Attempt record storage, injectable so tests get a fresh table per case.
pub trait AttemptStore {
    fn get(&self, identity: &str) -> Option<AttemptRecord>;
    fn set(&mut self, identity: &str, record: AttemptRecord);
    fn delete(&mut self, identity: &str);
}

/// In-memory attempt table keyed by identity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, AttemptRecord>,
}

impl AttemptStore for MemoryStore {
    fn get(&self, identity: &str) -> Option<AttemptRecord> {
        self.records.get(identity).cloned()
    }

    fn set(&mut self, identity: &str, record: AttemptRecord) {
        self.records.insert(identity.to_string(), record);
    }

    fn delete(&mut self, identity: &str) {
        self.records.remove(identity);
    }
}

/// Decides whether a login attempt may be submitted for an identity and
/// records submitted outcomes.
#[derive(Debug)]
pub struct RateLimiter<S = MemoryStore, C = SystemClock> {
    store: S,
    clock: C,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_parts(MemoryStore::default(), SystemClock)
    }
}

impl<S: AttemptStore, C: Clock> RateLimiter<S, C> {
    pub fn with_parts(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Whether a login submission is admissible right now. Fails open for
    /// unknown identities. A stale, non-blocked failure count resets here;
    /// an expired block keeps its count, so the very next failure re-locks.
    pub fn can_attempt(&mut self, identity: &str) -> bool {
        let now = self.clock.now_ms();
        let Some(record) = self.store.get(identity) else {
            return true;
        };

        if let Some(blocked_until) = record.blocked_until {
            return now >= blocked_until;
        }

        if now.saturating_sub(record.last_attempt_at) > LOCKOUT_WINDOW_MS {
            self.store.set(
                identity,
                AttemptRecord {
                    attempts: 0,
                    last_attempt_at: now,
                    blocked_until: None,
                },
            );
        }

        true
    }

    /// Records the outcome of a submitted attempt. Success deletes the record
    /// entirely; failure increments the count and locks at the threshold.
    pub fn record_attempt(&mut self, identity: &str, success: bool) {
        if success {
            self.store.delete(identity);
            return;
        }

        let now = self.clock.now_ms();
        let mut record = self.store.get(identity).unwrap_or(AttemptRecord {
            attempts: 0,
            last_attempt_at: now,
            blocked_until: None,
        });

        record.attempts += 1;
        record.last_attempt_at = now;
        if record.attempts >= MAX_ATTEMPTS {
            record.blocked_until = Some(now + LOCKOUT_WINDOW_MS);
        }

        self.store.set(identity, record);
    }

    /// Active lockout deadline, if any. Expiry is lazy: past deadlines are
    /// reported absent without a background sweep.
    pub fn blocked_until(&self, identity: &str) -> Option<u64> {
        let record = self.store.get(identity)?;
        let blocked_until = record.blocked_until?;
        if self.clock.now_ms() < blocked_until {
            Some(blocked_until)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<u64>>);

    impl ManualClock {
        fn advance_to(&self, now: u64) {
            self.0.set(now);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    fn limiter() -> (RateLimiter<MemoryStore, ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let limiter = RateLimiter::with_parts(MemoryStore::default(), clock.clone());
        (limiter, clock)
    }

    #[test]
    fn unknown_identity_fails_open() {
        let (mut limiter, _clock) = limiter();
        assert!(limiter.can_attempt("a@x.com"));
        assert_eq!(limiter.blocked_until("a@x.com"), None);
    }

    #[test]
    fn five_failures_block_for_the_full_window() {
        let (mut limiter, clock) = limiter();
        for _ in 0..5 {
            limiter.record_attempt("b@x.com", false);
        }

        assert!(!limiter.can_attempt("b@x.com"));
        assert_eq!(limiter.blocked_until("b@x.com"), Some(LOCKOUT_WINDOW_MS));

        clock.advance_to(LOCKOUT_WINDOW_MS - 1);
        assert!(!limiter.can_attempt("b@x.com"));

        clock.advance_to(LOCKOUT_WINDOW_MS);
        assert!(limiter.can_attempt("b@x.com"));
        assert_eq!(limiter.blocked_until("b@x.com"), None);
    }

    #[test]
    fn fewer_than_five_failures_do_not_block() {
        let (mut limiter, _clock) = limiter();
        for _ in 0..4 {
            limiter.record_attempt("a@x.com", false);
        }

        assert!(limiter.can_attempt("a@x.com"));
        assert_eq!(limiter.blocked_until("a@x.com"), None);
    }

    #[test]
    fn success_deletes_the_record_for_that_identity_only() {
        let (mut limiter, _clock) = limiter();
        for _ in 0..4 {
            limiter.record_attempt("a@x.com", false);
        }
        for _ in 0..5 {
            limiter.record_attempt("b@x.com", false);
        }

        limiter.record_attempt("a@x.com", true);

        assert!(limiter.can_attempt("a@x.com"));
        // A fresh failure after success counts from one again.
        limiter.record_attempt("a@x.com", false);
        assert!(limiter.can_attempt("a@x.com"));

        // The other identity's block is untouched.
        assert!(!limiter.can_attempt("b@x.com"));
    }

    #[test]
    fn success_clears_an_active_block() {
        let (mut limiter, _clock) = limiter();
        for _ in 0..5 {
            limiter.record_attempt("a@x.com", false);
        }
        assert!(!limiter.can_attempt("a@x.com"));

        limiter.record_attempt("a@x.com", true);
        assert!(limiter.can_attempt("a@x.com"));
        assert_eq!(limiter.blocked_until("a@x.com"), None);
    }

    #[test]
    fn stale_unblocked_count_resets_after_the_quiet_window() {
        let (mut limiter, clock) = limiter();
        for _ in 0..3 {
            limiter.record_attempt("a@x.com", false);
        }

        clock.advance_to(LOCKOUT_WINDOW_MS + 1);
        assert!(limiter.can_attempt("a@x.com"));

        // The next failure counts from one, so two more do not lock.
        limiter.record_attempt("a@x.com", false);
        limiter.record_attempt("a@x.com", false);
        assert!(limiter.can_attempt("a@x.com"));
        assert_eq!(limiter.blocked_until("a@x.com"), None);
    }

    #[test]
    fn failure_right_after_an_expired_block_relocks_immediately() {
        let (mut limiter, clock) = limiter();
        for _ in 0..5 {
            limiter.record_attempt("b@x.com", false);
        }
        assert_eq!(limiter.blocked_until("b@x.com"), Some(LOCKOUT_WINDOW_MS));

        clock.advance_to(LOCKOUT_WINDOW_MS + 1);
        assert!(limiter.can_attempt("b@x.com"));

        limiter.record_attempt("b@x.com", false);
        assert_eq!(
            limiter.blocked_until("b@x.com"),
            Some(LOCKOUT_WINDOW_MS + 1 + LOCKOUT_WINDOW_MS)
        );
        assert!(!limiter.can_attempt("b@x.com"));
    }

    #[test]
    fn blocked_until_expires_lazily() {
        let (mut limiter, clock) = limiter();
        for _ in 0..5 {
            limiter.record_attempt("a@x.com", false);
        }

        clock.advance_to(LOCKOUT_WINDOW_MS - 1);
        assert_eq!(limiter.blocked_until("a@x.com"), Some(LOCKOUT_WINDOW_MS));

        clock.advance_to(LOCKOUT_WINDOW_MS);
        assert_eq!(limiter.blocked_until("a@x.com"), None);
    }
}
