//! Shared, monotonically increasing progress counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Count of items processed by a driving loop.
///
/// Clones share the same underlying value. The loop is the only writer;
/// readers tolerate slightly stale values since they only feed display output.
#[derive(Clone, Debug, Default)]
pub struct ProgressCounter {
    processed: Arc<AtomicU64>,
}

impl ProgressCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more processed item.
    pub fn increment(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Current number of processed items.
    pub fn get(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }
}
