//! Timer-driven progress reporter task.

use crate::counter::ProgressCounter;
use crate::signal::CompletionSignal;
use crate::sink::ProgressSink;
use crate::snapshot::ProgressSnapshot;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Default time between two progress lines.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

/// What a reporter samples and how it labels it.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub interval: Duration,
    /// Expected number of items. `Some(0)` disables periodic output.
    pub total: Option<u64>,
    pub noun: &'static str,
    pub verb: &'static str,
}

impl ProgressConfig {
    /// Progress of a write loop with a known number of records.
    pub fn written(interval: Duration, total: u64) -> Self {
        Self {
            interval,
            total: Some(total),
            noun: "record",
            verb: "written",
        }
    }

    /// Progress of a scan whose row count is not known up front.
    pub fn verified(interval: Duration) -> Self {
        Self {
            interval,
            total: None,
            noun: "row",
            verb: "verified",
        }
    }
}

/// Background task that periodically reports a [`ProgressCounter`].
pub struct ProgressReporter {
    counter: ProgressCounter,
    start: Instant,
    config: ProgressConfig,
    sink: Arc<dyn ProgressSink>,
}

impl ProgressReporter {
    /// Start reporting on `handle`.
    ///
    /// `start` is the instant the driving loop began; all rates are measured
    /// from it. The returned [`CompletionSignal`] must be handed to the loop,
    /// which completes it after its final iteration.
    pub fn spawn(
        handle: &Handle,
        counter: ProgressCounter,
        start: Instant,
        config: ProgressConfig,
        sink: Arc<dyn ProgressSink>,
    ) -> (CompletionSignal, ReporterHandle) {
        let (signal, done) = CompletionSignal::channel();
        let reporter = Self {
            counter,
            start,
            config,
            sink,
        };
        let task = handle.spawn(reporter.run(done));
        (signal, ReporterHandle { task })
    }

    async fn run(self, mut done: oneshot::Receiver<()>) {
        if self.config.total == Some(0) {
            // Nothing to report on; just wait for the loop to finish.
            let _ = done.await;
            return;
        }

        let period = self.config.interval.max(Duration::from_millis(1));
        let Some(first) = tokio::time::Instant::from_std(self.start).checked_add(period) else {
            warn!("Progress interval {:?} is out of range, not reporting", period);
            let _ = done.await;
            return;
        };
        let mut ticker = tokio::time::interval_at(first, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!("Starting progress logging every {:?}", period);
        loop {
            tokio::select! {
                biased;
                // Either completed or the loop dropped the signal on error.
                _ = &mut done => break,
                _ = ticker.tick() => self.sink.emit(&self.snapshot()),
            }
        }
        debug!("Progress logging stopped");
    }

    fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            processed: self.counter.get(),
            total: self.config.total,
            elapsed: self.start.elapsed(),
            noun: self.config.noun,
            verb: self.config.verb,
        }
    }
}

/// Handle to a running reporter task.
#[derive(Debug)]
pub struct ReporterHandle {
    task: JoinHandle<()>,
}

impl ReporterHandle {
    /// Wait for the reporter to stop.
    ///
    /// Returns once the completion signal has been observed (or dropped), so
    /// no snapshot is emitted after this resolves.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            warn!("Progress reporter task failed: {}", e);
        }
    }
}
