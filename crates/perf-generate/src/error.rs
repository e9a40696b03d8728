//! Error types for the generator.

use thiserror::Error;

/// Errors that abort a generate run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Storage error (drop/create/prepare/insert).
    #[error(transparent)]
    Store(#[from] perf_store::StoreError),

    /// The random source failed.
    #[error("Can not read random values: {0}")]
    Randomness(String),

    /// The blocking insert task panicked or was cancelled.
    #[error("Generator task failed: {0}")]
    Task(String),
}
