//! sqlite3perf library
//!
//! Measures how fast SQLite can take and give back a synthetic dataset.
//!
//! # Commands
//!
//! - `generate` drops and recreates the `bench` table and inserts N records,
//!   each one an eight byte random value plus its SHA-256 digest, one row at
//!   a time.
//! - `bench` scans the whole table, recomputes every digest and fails on the
//!   first mismatch.
//!
//! Both commands report progress in the background while the row loop runs.
//!
//! # Workload crates
//!
//! - `perf_core` - record encoding and digests
//! - `perf_store` - SQLite storage adapter
//! - `perf_progress` - counter, completion signal and reporter task
//! - `perf_generate` - the generate loop
//! - `perf_verify` - the bench loop

pub mod commands;
pub mod config;

pub use commands::{run_bench, run_generate};
pub use config::{load_config, ConfigFile, DEFAULT_DB_PATH};
