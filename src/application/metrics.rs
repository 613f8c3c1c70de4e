//! Observability counters for submission outcomes.
//!
//! Provides per-submitter statistics for monitoring and debugging. All
//! counters use atomic operations for thread-safe updates and reads.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters tracking submission outcomes.
///
/// Cloning is cheap and clones share the same underlying counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Submissions the gate admitted
    submissions_admitted: AtomicU64,
    /// Submissions the gate rejected
    submissions_rejected: AtomicU64,
    /// Admitted submissions whose transport call faulted
    transport_failures: AtomicU64,
}

impl Metrics {
    /// Create a new counter set.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                submissions_admitted: AtomicU64::new(0),
                submissions_rejected: AtomicU64::new(0),
                transport_failures: AtomicU64::new(0),
            }),
        }
    }

    /// Record an admitted submission.
    pub(crate) fn record_admitted(&self) {
        self.inner
            .submissions_admitted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected submission.
    pub(crate) fn record_rejected(&self) {
        self.inner
            .submissions_rejected
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a transport fault on an admitted submission.
    pub(crate) fn record_transport_failure(&self) {
        self.inner.transport_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Total submissions admitted by the gate.
    pub fn submissions_admitted(&self) -> u64 {
        self.inner.submissions_admitted.load(Ordering::Relaxed)
    }

    /// Total submissions rejected by the gate.
    pub fn submissions_rejected(&self) -> u64 {
        self.inner.submissions_rejected.load(Ordering::Relaxed)
    }

    /// Total admitted submissions whose transport call faulted.
    pub fn transport_failures(&self) -> u64 {
        self.inner.transport_failures.load(Ordering::Relaxed)
    }

    /// Get a point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions_admitted: self.submissions_admitted(),
            submissions_rejected: self.submissions_rejected(),
            transport_failures: self.transport_failures(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inner.submissions_admitted.store(0, Ordering::Relaxed);
        self.inner.submissions_rejected.store(0, Ordering::Relaxed);
        self.inner.transport_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of submission counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Submissions the gate admitted
    pub submissions_admitted: u64,
    /// Submissions the gate rejected
    pub submissions_rejected: u64,
    /// Admitted submissions whose transport call faulted
    pub transport_failures: u64,
}

impl MetricsSnapshot {
    /// Total submissions seen (admitted + rejected).
    pub fn total_submissions(&self) -> u64 {
        self.submissions_admitted
            .saturating_add(self.submissions_rejected)
    }

    /// Ratio of rejected submissions to total (0.0 to 1.0).
    ///
    /// Returns 0.0 if no submissions have been processed.
    pub fn rejection_rate(&self) -> f64 {
        let total = self.total_submissions();
        if total == 0 {
            0.0
        } else {
            self.submissions_rejected as f64 / total as f64
        }
    }
}
