//! Statistics of a verification run.

use perf_progress::{average_per_item, items_per_second};
use std::time::Duration;

/// What a finished verification run measured.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    /// Rows whose hash matched.
    pub verified: u64,
    /// Rows skipped because their value was not valid hex.
    pub skipped: u64,
    /// Time from start until the scan statement was ready.
    pub query_latency: Duration,
    /// Time from loop start until the first row arrived, if any row did.
    pub first_row_latency: Option<Duration>,
    /// Time spent in the row loop.
    pub loop_elapsed: Duration,
    /// Time from start (before the query) until the last row was checked.
    pub total_elapsed: Duration,
}

impl VerificationReport {
    /// Total elapsed time divided by verified rows; skipped rows do not count.
    pub fn average_per_row(&self) -> Duration {
        average_per_item(self.total_elapsed, self.verified)
    }

    pub fn rows_per_second(&self) -> f64 {
        items_per_second(self.verified, self.total_elapsed)
    }
}
