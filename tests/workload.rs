//! End-to-end generate -> bench runs through the command handlers.

use perf_generate::GenerateOptions;
use rusqlite::Connection;
use sqlite3perf::{run_bench, run_generate};
use std::time::Duration;
use tempfile::TempDir;

const INTERVAL: Duration = Duration::from_millis(10);

fn options(records: u64) -> GenerateOptions {
    GenerateOptions {
        records,
        interval: INTERVAL,
        vacuum: false,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_generate_then_bench() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("sqlite3perf.db");

    let generated = run_generate(&db, options(100)).await.unwrap();
    let verified = run_bench(&db, INTERVAL).await.unwrap();

    assert_eq!(generated.records_written, 100);
    assert_eq!(verified.verified, 100);
    assert_eq!(verified.skipped, 0);
}

#[tokio::test]
async fn test_regenerate_replaces_dataset() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("sqlite3perf.db");

    run_generate(&db, options(30)).await.unwrap();
    run_generate(&db, options(12)).await.unwrap();

    assert_eq!(run_bench(&db, INTERVAL).await.unwrap().verified, 12);
}

#[tokio::test]
async fn test_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("sqlite3perf.db");

    let generated = run_generate(&db, options(0)).await.unwrap();
    let verified = run_bench(&db, INTERVAL).await.unwrap();

    assert_eq!(generated.records_written, 0);
    assert_eq!(verified.verified, 0);
    assert_eq!(verified.average_per_row(), Duration::ZERO);
}

#[tokio::test]
async fn test_corrupted_hash_fails_bench() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("sqlite3perf.db");
    run_generate(&db, options(20)).await.unwrap();

    let conn = Connection::open(&db).unwrap();
    conn.execute(
        "UPDATE bench SET hash = replace(hash, substr(hash, 1, 1), 'x') WHERE ID = 11",
        [],
    )
    .unwrap();
    drop(conn);

    let err = run_bench(&db, INTERVAL).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("do not match for ID 11"), "{message}");
}

#[tokio::test]
async fn test_corrupted_value_is_skipped() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("sqlite3perf.db");
    run_generate(&db, options(20)).await.unwrap();

    let conn = Connection::open(&db).unwrap();
    conn.execute("UPDATE bench SET rand = 'xyz' WHERE ID = 0", [])
        .unwrap();
    drop(conn);

    let report = run_bench(&db, INTERVAL).await.unwrap();
    assert_eq!(report.verified, 19);
    assert_eq!(report.skipped, 1);
}

#[tokio::test]
async fn test_vacuum_run() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("sqlite3perf.db");

    let report = run_generate(
        &db,
        GenerateOptions {
            vacuum: true,
            ..options(10)
        },
    )
    .await
    .unwrap();

    assert!(report.vacuum.is_some_and(|v| v.error.is_none()));
    assert_eq!(run_bench(&db, INTERVAL).await.unwrap().verified, 10);
}

#[tokio::test]
async fn test_bench_without_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("never-generated.db");

    assert!(run_bench(&db, INTERVAL).await.is_err());
}
