//! Bench command handler.

use anyhow::Context;
use perf_store::BenchStore;
use perf_verify::{VerificationReport, Verifier};
use std::path::Path;
use std::time::Duration;

/// Run the bench command: verify every record stored at `db`.
pub async fn run_bench(db: &Path, interval: Duration) -> anyhow::Result<VerificationReport> {
    tracing::info!("Opening database {}", db.display());
    let store = BenchStore::open(db)?;

    Verifier::new(store, interval)
        .run()
        .await
        .with_context(|| format!("Benchmark over {} failed", db.display()))
}
