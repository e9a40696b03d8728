//! The bench loop.

use crate::compare::{check_row, RowCheck};
use crate::error::VerifyError;
use crate::report::VerificationReport;
use perf_progress::{
    group_thousands, ProgressConfig, ProgressCounter, ProgressReporter, ProgressSink,
    ReporterHandle, TracingSink,
};
use perf_store::BenchStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Scans the `bench` table and checks every row's hash.
pub struct Verifier {
    store: BenchStore,
    interval: Duration,
    sink: Arc<dyn ProgressSink>,
}

impl Verifier {
    /// Create a verifier reporting progress every `interval`.
    pub fn new(store: BenchStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            sink: Arc::new(TracingSink),
        }
    }

    /// Send progress lines to `sink` instead of the log.
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Verify all rows.
    ///
    /// Fails on the first hash mismatch or storage error. Rows whose value is
    /// not valid hex are skipped and counted in
    /// [`VerificationReport::skipped`].
    pub async fn run(self) -> Result<VerificationReport, VerifyError> {
        let runtime = Handle::current();
        let (report, reporter) = tokio::task::spawn_blocking(move || self.verify(&runtime))
            .await
            .map_err(|e| VerifyError::Task(e.to_string()))??;

        reporter.wait().await;
        Ok(report)
    }

    fn verify(self, runtime: &Handle) -> Result<(VerificationReport, ReporterHandle), VerifyError> {
        info!("Running benchmark against {}", self.store.location());

        let start = Instant::now();
        let mut scan = self.store.scan()?;
        let query_latency = start.elapsed();
        info!("Time after query: {:?}", query_latency);

        info!("Beginning loop");
        let counter = ProgressCounter::new();
        let loop_start = Instant::now();
        let (signal, reporter) = ProgressReporter::spawn(
            runtime,
            counter.clone(),
            loop_start,
            ProgressConfig::verified(self.interval),
            self.sink,
        );

        let mut skipped = 0u64;
        let mut first_row_latency = None;
        scan.for_each::<VerifyError, _>(|row| {
            if first_row_latency.is_none() {
                let latency = loop_start.elapsed();
                info!("Accessing the first result set ({}) took {:?}", row, latency);
                first_row_latency = Some(latency);
            }

            match check_row(&row)? {
                RowCheck::Verified => counter.increment(),
                RowCheck::Undecodable(e) => {
                    warn!("Skipping row {}: {}", row.id, e);
                    skipped += 1;
                }
            }
            Ok(())
        })?;

        let total_elapsed = start.elapsed();
        let loop_elapsed = loop_start.elapsed();
        signal.complete();

        let report = VerificationReport {
            verified: counter.get(),
            skipped,
            query_latency,
            first_row_latency,
            loop_elapsed,
            total_elapsed,
        };
        log_summary(&report);

        Ok((report, reporter))
    }
}

fn log_summary(report: &VerificationReport) {
    info!("{} rows processed", group_thousands(report.verified));
    if report.skipped > 0 {
        warn!(
            "{} rows skipped because their value could not be decoded",
            group_thousands(report.skipped)
        );
    }
    info!("Finished loop after {:?}", report.loop_elapsed);
    info!(
        "Average {:?} per record, {:?} overall, {:.2} rows/s",
        report.average_per_row(),
        report.total_elapsed,
        report.rows_per_second()
    );
}
