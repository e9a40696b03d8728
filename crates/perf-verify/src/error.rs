//! Error types for verification.

use thiserror::Error;

/// Errors that abort a verification run.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Query, row iteration or column read failed.
    #[error(transparent)]
    Store(#[from] perf_store::StoreError),

    /// A stored hash does not match the digest of the stored value.
    #[error(
        "Hash of original value and persisted hash do not match for ID {id}: computed {computed}, stored {stored}"
    )]
    HashMismatch {
        id: i64,
        computed: String,
        stored: String,
    },

    /// The blocking scan task panicked or was cancelled.
    #[error("Verifier task failed: {0}")]
    Task(String),
}
