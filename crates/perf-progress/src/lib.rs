//! Background progress reporting for long-running record loops.
//!
//! A driving loop owns a [`ProgressCounter`] and bumps it once per record.
//! [`ProgressReporter::spawn`] starts a task that samples the counter on a
//! fixed interval and emits a [`ProgressSnapshot`] through a [`ProgressSink`]
//! until the loop hands back its [`CompletionSignal`].
//!
//! # Example
//!
//! ```ignore
//! let counter = ProgressCounter::new();
//! let (signal, reporter) = ProgressReporter::spawn(
//!     &tokio::runtime::Handle::current(),
//!     counter.clone(),
//!     Instant::now(),
//!     ProgressConfig::written(Duration::from_secs(2), 1_000),
//!     Arc::new(TracingSink),
//! );
//! for _ in 0..1_000 {
//!     // ... work ...
//!     counter.increment();
//! }
//! signal.complete();
//! reporter.wait().await;
//! ```

pub mod counter;
pub mod reporter;
pub mod signal;
pub mod sink;
pub mod snapshot;

pub use counter::ProgressCounter;
pub use reporter::{ProgressConfig, ProgressReporter, ReporterHandle, DEFAULT_INTERVAL};
pub use signal::CompletionSignal;
pub use sink::{CollectingSink, ProgressSink, TracingSink};
pub use snapshot::{average_per_item, group_thousands, items_per_second, ProgressSnapshot};
