//! Process-lifetime visit tally.
//!
//! The counter is a best-effort figure for the admin metrics page, not an
//! audit log. Each operation is individually atomic; an `increment`
//! racing a `reset` may land on either side of it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrency-safe visit counter shared by every request task.
///
/// Wrapped in [`Arc`](std::sync::Arc) inside the application state. All
/// operations are lock-free.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }

    /// Record one visit.
    pub fn increment(&self) {
        // No other memory is published through the counter, so relaxed
        // ordering is sufficient.
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the current tally.
    pub fn load(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Set the tally back to exactly zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
