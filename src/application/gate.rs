//! Thread-safe admission gate.
//!
//! Wraps the pure [`RateGate`] behind a single mutex and a clock port so
//! that concurrent callers share one consistent window.

use crate::application::ports::Clock;
use crate::domain::gate::{Admission, RateGate};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// A [`RateGate`] shared between threads.
///
/// The entire admit attempt - window rollover, the saturation check, and
/// the increment - runs under one lock acquisition. Two callers can never
/// both observe a free slot and both take it, so the per-window limit is
/// never overshot regardless of interleaving.
///
/// `try_admit` never blocks on anything but the short critical section
/// itself; in particular, no I/O ever happens while the lock is held.
#[derive(Debug)]
pub struct AdmissionGate {
    state: Mutex<RateGate>,
    clock: Arc<dyn Clock>,
}

impl AdmissionGate {
    /// Create a gate admitting `limit` operations per `window`.
    ///
    /// The first window is anchored at the clock's current time.
    pub fn new(limit: u32, window: Duration, clock: Arc<dyn Clock>) -> Self {
        let origin = clock.now();
        Self {
            state: Mutex::new(RateGate::new(limit, window, origin)),
            clock,
        }
    }

    /// Attempt to admit one operation.
    ///
    /// Returns synchronously and immediately; a rejected attempt is not
    /// queued or remembered.
    pub fn try_admit(&self) -> Admission {
        let now = self.clock.now();
        // Gate state stays consistent across a panicking holder (every
        // mutation is a complete assignment), so poisoning is recoverable.
        let mut gate = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        gate.try_admit_at(now)
    }

    /// The configured per-window admission limit.
    pub fn limit(&self) -> u32 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .limit()
    }

    /// The configured window span.
    pub fn window(&self) -> Duration {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .window()
    }
}
