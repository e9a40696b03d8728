//! The generate loop.

use crate::error::GenerateError;
use perf_core::{Record, VALUE_LEN};
use perf_progress::{
    average_per_item, items_per_second, CompletionSignal, ProgressConfig, ProgressCounter,
    ProgressReporter, ProgressSink, ReporterHandle, TracingSink, DEFAULT_INTERVAL,
};
use perf_store::{BenchStore, RecordWriter};
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Default number of records to generate.
pub const DEFAULT_RECORDS: u64 = 1000;

/// Settings for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub records: u64,
    /// Time between progress lines.
    pub interval: Duration,
    /// Run VACUUM after the inserts.
    pub vacuum: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            interval: DEFAULT_INTERVAL,
            vacuum: false,
        }
    }
}

/// Result of the optional VACUUM step.
#[derive(Debug, Clone)]
pub struct VacuumOutcome {
    pub duration: Duration,
    /// Set when VACUUM failed. The run still counts as successful.
    pub error: Option<String>,
}

/// Statistics of a finished generate run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub records_written: u64,
    /// Wall-clock time of the insert loop.
    pub elapsed: Duration,
    pub vacuum: Option<VacuumOutcome>,
}

impl GenerateReport {
    pub fn average_per_record(&self) -> Duration {
        average_per_item(self.elapsed, self.records_written)
    }

    pub fn records_per_second(&self) -> f64 {
        items_per_second(self.records_written, self.elapsed)
    }
}

/// Fills the `bench` table with random records.
///
/// Uses the operating system RNG unless another source is supplied with
/// [`Generator::with_rng`].
pub struct Generator<R = OsRng> {
    store: BenchStore,
    rng: R,
    options: GenerateOptions,
    sink: Arc<dyn ProgressSink>,
}

impl Generator<OsRng> {
    pub fn new(store: BenchStore, options: GenerateOptions) -> Self {
        Self::with_rng(store, options, OsRng)
    }
}

impl<R> Generator<R>
where
    R: RngCore + Send + 'static,
{
    /// Create a generator drawing values from `rng`.
    pub fn with_rng(store: BenchStore, options: GenerateOptions, rng: R) -> Self {
        Self {
            store,
            rng,
            options,
            sink: Arc::new(TracingSink),
        }
    }

    /// Send progress lines to `sink` instead of the log.
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Drop and recreate the table, then insert all records.
    ///
    /// The insert loop runs on the blocking pool while progress is reported
    /// from a separate task. Any storage or randomness failure aborts the
    /// run; a failed VACUUM does not.
    pub async fn run(self) -> Result<GenerateReport, GenerateError> {
        let runtime = Handle::current();
        let (report, reporter) = tokio::task::spawn_blocking(move || self.generate(&runtime))
            .await
            .map_err(|e| GenerateError::Task(e.to_string()))??;

        reporter.wait().await;
        Ok(report)
    }

    fn generate(self, runtime: &Handle) -> Result<(GenerateReport, ReporterHandle), GenerateError> {
        let Self {
            store,
            mut rng,
            options,
            sink,
        } = self;

        info!("Generating {} records", options.records);
        store.recreate_table()?;

        info!("Setting up the environment");
        let mut writer = store.writer()?;
        let counter = ProgressCounter::new();

        let start = Instant::now();
        let (signal, reporter) = ProgressReporter::spawn(
            runtime,
            counter.clone(),
            start,
            ProgressConfig::written(options.interval, options.records),
            sink,
        );

        info!("Starting inserts");
        let elapsed = insert_records(
            &mut writer,
            &mut rng,
            options.records,
            &counter,
            start,
            signal,
        )?;
        drop(writer);

        let report = GenerateReport {
            records_written: counter.get(),
            elapsed,
            vacuum: None,
        };
        log_summary(&report, options.records);

        let vacuum = options.vacuum.then(|| run_vacuum(&store));
        Ok((GenerateReport { vacuum, ..report }, reporter))
    }
}

/// Insert `records` rows in ascending id order and return the time elapsed
/// since `start`.
///
/// `signal` is completed right after the last insert; on error it is
/// dropped, which also stops the reporter.
fn insert_records<R: RngCore>(
    writer: &mut RecordWriter<'_>,
    rng: &mut R,
    records: u64,
    counter: &ProgressCounter,
    start: Instant,
    signal: CompletionSignal,
) -> Result<Duration, GenerateError> {
    let mut value = [0u8; VALUE_LEN];

    for id in 0..records {
        rng.try_fill_bytes(&mut value)
            .map_err(|e| GenerateError::Randomness(e.to_string()))?;
        writer.write(&Record::new(id, value))?;
        counter.increment();
    }

    let elapsed = start.elapsed();
    signal.complete();
    Ok(elapsed)
}

fn log_summary(report: &GenerateReport, total: u64) {
    let width = total.to_string().len();
    let percent = if total > 0 {
        report.records_written as f64 * 100.0 / total as f64
    } else {
        0.0
    };
    info!(
        "{:>width$}/{:>width$} ({:6.2}%) written in {:?}",
        report.records_written, total, percent, report.elapsed
    );
    info!(
        "Average time per record: {:?}, {:.2} records/s",
        report.average_per_record(),
        report.records_per_second()
    );
}

fn run_vacuum(store: &BenchStore) -> VacuumOutcome {
    info!("Vacuuming database file {}", store.location());
    let start = Instant::now();

    let error = match store.vacuum() {
        Ok(()) => None,
        Err(e) => {
            warn!("Vacuuming database caused an error: {}", e);
            warn!("Proceed with according caution.");
            Some(e.to_string())
        }
    };

    let duration = start.elapsed();
    info!("Vacuuming took {:?}", duration);
    VacuumOutcome { duration, error }
}
