//! Command-line interface for sqlite3perf
//!
//! # Usage Examples
//!
//! ```bash
//! # Fill the database with one million records, logging every 5 seconds
//! sqlite3perf generate --records 1000000 --interval 5s --vacuum
//!
//! # Read every record back and verify its hash
//! sqlite3perf bench
//!
//! # Use another database file
//! sqlite3perf --db /var/tmp/perf.db bench
//! ```
//!
//! Settings can also come from a TOML or YAML file passed with `--config`, or
//! from `$HOME/.sqlite3perf.toml` / `.yaml` when present.

use clap::{Parser, Subcommand};
use perf_generate::GenerateArgs;
use perf_verify::BenchArgs;
use sqlite3perf::{commands, config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlite3perf")]
#[command(about = "Small application to judge SQLite3 insert and read performance")]
#[command(
    long_about = "Fill a database with the 'generate' command, then call the 'bench' command \
                  to see how fast the records can be read back and verified."
)]
struct Cli {
    /// Path to the database file [default: ./sqlite3perf.db]
    #[arg(long, short = 'd', global = true, env = "SQLITE3PERF_DB")]
    db: Option<PathBuf>,

    /// Config file (default is $HOME/.sqlite3perf.toml or $HOME/.sqlite3perf.yaml)
    #[arg(long, global = true, env = "SQLITE3PERF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records to benchmark against
    ///
    /// Each record consists of an ID, an 8 byte hex encoded random value and
    /// a SHA-256 hash of said value. ATTENTION: the 'bench' table is DROPPED
    /// each time this command is called, before it is (re-)generated!
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Read all records and verify their hashes
    ///
    /// All records are retrieved, the saved random value is decoded from hex,
    /// hashed with SHA-256 and compared with the hash saved to the database.
    Bench {
        #[command(flatten)]
        args: BenchArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let home = std::env::var_os("HOME").map(PathBuf::from);
    let file = config::load_config(cli.config.as_deref(), home.as_deref())?;
    let db = config::resolve_db_path(cli.db, &file);

    match cli.command {
        Commands::Generate { args } => {
            let options = config::resolve_generate_options(&args, &file)?;
            commands::run_generate(&db, options).await?;
        }
        Commands::Bench { args } => {
            let interval = config::resolve_bench_interval(&args, &file)?;
            commands::run_bench(&db, interval).await?;
        }
    }

    Ok(())
}
