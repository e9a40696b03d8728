//! Record generator for sqlite3perf.
//!
//! Rebuilds the `bench` table and fills it with `N` records, each holding
//! eight random bytes and their SHA-256 digest, inserted one row at a time.
//! Progress is reported in the background while the insert loop runs.

pub mod args;
pub mod error;
pub mod generator;

pub use args::GenerateArgs;
pub use error::GenerateError;
pub use generator::{GenerateOptions, GenerateReport, Generator, VacuumOutcome, DEFAULT_RECORDS};
