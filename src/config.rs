//! Settings resolution.
//!
//! Each value comes from the command line (or its environment variable)
//! first, then the config file, then the built-in default.

pub mod duration;
pub mod file;

pub use duration::parse_duration;
pub use file::{load_config, ConfigFile, IntervalSetting};

use perf_generate::{GenerateArgs, GenerateOptions, DEFAULT_RECORDS};
use perf_progress::DEFAULT_INTERVAL;
use perf_verify::BenchArgs;
use std::path::PathBuf;
use std::time::Duration;

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "./sqlite3perf.db";

pub fn resolve_db_path(cli: Option<PathBuf>, file: &ConfigFile) -> PathBuf {
    cli.or_else(|| file.db.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

pub fn resolve_generate_options(
    args: &GenerateArgs,
    file: &ConfigFile,
) -> anyhow::Result<GenerateOptions> {
    let interval = resolve_interval(args.interval.as_deref(), file.generate.interval.as_ref())?;

    Ok(GenerateOptions {
        records: args
            .records
            .or(file.generate.records)
            .unwrap_or(DEFAULT_RECORDS),
        interval,
        vacuum: args.vacuum || file.generate.vacuum.unwrap_or(false),
    })
}

pub fn resolve_bench_interval(args: &BenchArgs, file: &ConfigFile) -> anyhow::Result<Duration> {
    resolve_interval(args.interval.as_deref(), file.bench.interval.as_ref())
}

fn resolve_interval(
    cli: Option<&str>,
    file: Option<&IntervalSetting>,
) -> anyhow::Result<Duration> {
    match (cli, file) {
        (Some(text), _) => parse_duration(text),
        (None, Some(setting)) => setting.to_duration(),
        (None, None) => Ok(DEFAULT_INTERVAL),
    }
}
