//! The admission gate: a counted, resetting time window.
//!
//! This module defines the pure gate logic. It holds no lock and reads no
//! clock; the caller supplies every timestamp, which keeps the type
//! deterministic and easily testable.

use std::time::{Duration, Instant};

/// Decision made by the gate for a single admit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The attempt was admitted and counted against the current window
    Admitted,
    /// The window is saturated; the attempt was dropped without side effects
    Rejected,
}

impl Admission {
    /// Check if this decision is Admitted.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }

    /// Check if this decision is Rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Admission::Rejected)
    }
}

/// Bounds admitted operations to `limit` per fixed-origin time window.
///
/// The window is rolled over lazily: state resets on the first attempt that
/// arrives after the window has expired, never from a background timer. A
/// long idle gap followed by a burst therefore resets the window exactly
/// once, and the burst is throttled against the fresh window.
///
/// A rejected attempt leaves no trace: nothing is counted, nothing is
/// queued, and the caller decides whether to retry.
///
/// `RateGate` itself is not synchronized. Share it behind a single lock
/// held for the whole admit attempt (see `AdmissionGate`), so that the
/// check and the increment cannot interleave with another caller's.
///
/// # Example
/// ```
/// use rategate::RateGate;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut gate = RateGate::new(2, Duration::from_secs(1), start);
///
/// assert!(gate.try_admit_at(start).is_admitted());
/// assert!(gate.try_admit_at(start).is_admitted());
/// assert!(gate.try_admit_at(start).is_rejected());
///
/// // After the window elapses, the next attempt starts a fresh window.
/// let later = start + Duration::from_millis(1100);
/// assert!(gate.try_admit_at(later).is_admitted());
/// ```
#[derive(Debug, Clone)]
pub struct RateGate {
    limit: u32,
    window: Duration,
    admitted_in_window: u32,
    window_start: Instant,
}

impl RateGate {
    /// Create a gate admitting `limit` operations per `window`.
    ///
    /// `origin` marks the start of the first window; callers normally pass
    /// the construction-time "now" of whatever clock they use. `limit` is
    /// expected to be positive and `window` non-zero; both are validated at
    /// the builder boundary, not here.
    pub fn new(limit: u32, window: Duration, origin: Instant) -> Self {
        Self {
            limit,
            window,
            admitted_in_window: 0,
            window_start: origin,
        }
    }

    /// Attempt to admit one operation at time `now`.
    ///
    /// Rolls the window over first if it has expired, then rejects iff the
    /// current window already holds `limit` admissions. On admission the
    /// counter is incremented; on rejection nothing changes.
    ///
    /// The check and the increment are a single step by construction, so a
    /// gate shared under one lock can never overshoot its limit.
    pub fn try_admit_at(&mut self, now: Instant) -> Admission {
        let elapsed = now.saturating_duration_since(self.window_start);

        if elapsed > self.window {
            self.admitted_in_window = 0;
            self.window_start = now;
        }

        if elapsed <= self.window && self.admitted_in_window >= self.limit {
            return Admission::Rejected;
        }

        self.admitted_in_window += 1;
        Admission::Admitted
    }

    /// The configured per-window admission limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The configured window span.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Admissions counted against the current window.
    pub fn admitted_in_window(&self) -> u32 {
        self.admitted_in_window
    }
}
