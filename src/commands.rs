//! Command handlers.
//!
//! Each handler opens the database, runs its workload and returns the
//! statistics; errors carry enough context to be printed as-is by `main`.

pub mod bench;
pub mod generate;

pub use bench::run_bench;
pub use generate::run_generate;
