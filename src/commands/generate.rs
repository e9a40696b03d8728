//! Generate command handler.

use anyhow::Context;
use perf_generate::{GenerateOptions, GenerateReport, Generator};
use perf_store::BenchStore;
use std::path::Path;

/// Run the generate command: rebuild the `bench` table at `db`.
pub async fn run_generate(db: &Path, options: GenerateOptions) -> anyhow::Result<GenerateReport> {
    tracing::info!("Opening database {}", db.display());
    let store = BenchStore::open(db)?;

    Generator::new(store, options)
        .run()
        .await
        .with_context(|| format!("Failed to generate records in {}", db.display()))
}
