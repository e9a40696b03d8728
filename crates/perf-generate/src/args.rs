//! CLI argument definitions for the generate command.

use clap::Args;

/// Arguments of `sqlite3perf generate`.
///
/// Every value is optional so a config file can fill in what the command
/// line leaves out.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Number of records to generate [default: 1000]
    #[arg(long, short = 'r')]
    pub records: Option<u64>,

    /// Interval between progress messages, e.g. "2", "2s", "500ms" [default: 2s]
    #[arg(long, short = 'i')]
    pub interval: Option<String>,

    /// VACUUM the database file after the records were generated
    #[arg(long, short = 'v')]
    pub vacuum: bool,
}
