//! Full-scan hash verifier for sqlite3perf.
//!
//! Reads every row of the `bench` table, recomputes the SHA-256 digest of
//! the stored value and compares it with the stored hash. A mismatch aborts
//! the run; a value that is not valid hex is logged and skipped.
//!
//! # Example
//!
//! ```ignore
//! use perf_store::BenchStore;
//! use perf_verify::Verifier;
//!
//! let store = BenchStore::open(Path::new("./sqlite3perf.db"))?;
//! let report = Verifier::new(store, Duration::from_secs(2)).run().await?;
//! assert_eq!(report.skipped, 0);
//! ```

pub mod args;
pub mod compare;
pub mod error;
pub mod report;
pub mod verifier;

pub use args::BenchArgs;
pub use compare::{check_row, RowCheck};
pub use error::VerifyError;
pub use report::VerificationReport;
pub use verifier::Verifier;
