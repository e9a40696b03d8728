//! SQLite storage adapter for sqlite3perf.
//!
//! Owns the lifecycle of the single `bench` table: dropping and recreating it
//! for generation, writing records one at a time through a prepared
//! statement, scanning it back for verification, and compacting the file.

pub mod error;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use store::{BenchStore, RecordWriter, RowScan, StoredRow};
