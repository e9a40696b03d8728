//! CLI argument definitions for the bench command.

use clap::Args;

/// Arguments of `sqlite3perf bench`.
#[derive(Args, Clone, Debug, Default)]
pub struct BenchArgs {
    /// Interval between progress messages, e.g. "2", "2s", "500ms" [default: 2s]
    #[arg(long, short = 'i')]
    pub interval: Option<String>,
}
