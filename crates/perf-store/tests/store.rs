//! Storage adapter tests against in-memory and on-disk databases.

use perf_core::Record;
use perf_store::{BenchStore, StoreError, StoredRow};
use std::path::Path;
use tempfile::TempDir;

fn memory_store() -> BenchStore {
    BenchStore::open(Path::new(":memory:")).unwrap()
}

fn write_records(store: &BenchStore, count: u64) {
    let mut writer = store.writer().unwrap();
    for id in 0..count {
        let value = (id * 31).to_le_bytes();
        writer.write(&Record::new(id, value)).unwrap();
    }
}

fn read_all(store: &BenchStore) -> Vec<StoredRow> {
    let mut rows = Vec::new();
    store
        .scan()
        .unwrap()
        .for_each(|row| {
            rows.push(row);
            Ok::<_, StoreError>(())
        })
        .unwrap();
    rows
}

#[test]
fn test_recreate_and_write() {
    let store = memory_store();
    store.recreate_table().unwrap();
    write_records(&store, 10);

    assert_eq!(read_all(&store).len(), 10);

    let rows = read_all(&store);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());

    let expected = Record::new(3, 93u64.to_le_bytes());
    assert_eq!(rows[3].rand, expected.value_hex());
    assert_eq!(rows[3].hash, expected.hash_hex());
}

#[test]
fn test_recreate_discards_previous_rows() {
    let store = memory_store();
    store.recreate_table().unwrap();
    write_records(&store, 5);

    store.recreate_table().unwrap();
    assert_eq!(read_all(&store).len(), 0);
}

#[test]
fn test_duplicate_id_is_insert_error() {
    let store = memory_store();
    store.recreate_table().unwrap();

    let mut writer = store.writer().unwrap();
    writer.write(&Record::new(1, [0; 8])).unwrap();
    let err = writer.write(&Record::new(1, [1; 8])).unwrap_err();

    assert!(matches!(err, StoreError::Insert { id: 1, .. }));
}

#[test]
fn test_id_out_of_range() {
    let store = memory_store();
    store.recreate_table().unwrap();

    let err = store
        .writer()
        .unwrap()
        .write(&Record::new(u64::MAX, [0; 8]))
        .unwrap_err();

    assert!(matches!(err, StoreError::IdOutOfRange(u64::MAX)));
}

#[test]
fn test_scan_without_table_fails() {
    let store = memory_store();

    assert!(matches!(store.scan(), Err(StoreError::Query(_))));
}

#[test]
fn test_writer_without_table_fails() {
    let store = memory_store();

    assert!(matches!(store.writer(), Err(StoreError::Prepare(_))));
}

#[test]
fn test_scan_stops_on_visitor_error() {
    let store = memory_store();
    store.recreate_table().unwrap();
    write_records(&store, 10);

    let mut seen = 0;
    let result: Result<(), Box<dyn std::error::Error>> = store.scan().unwrap().for_each(|row| {
        seen += 1;
        if row.id == 4 {
            return Err("stop".into());
        }
        Ok(())
    });

    assert_eq!(result.unwrap_err().to_string(), "stop");
    assert_eq!(seen, 5);
}

#[test]
fn test_file_store_persists_and_vacuums() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("perf.db");

    {
        let store = BenchStore::open(&path).unwrap();
        store.recreate_table().unwrap();
        write_records(&store, 25);
        store.vacuum().unwrap();
    }

    let store = BenchStore::open(&path).unwrap();
    assert_eq!(store.location(), path.display().to_string());
    assert_eq!(read_all(&store).len(), 25);
}

#[test]
fn test_open_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("perf.db");

    assert!(matches!(
        BenchStore::open(&path),
        Err(StoreError::Open { .. })
    ));
}

#[test]
fn test_stored_row_display() {
    let row = StoredRow {
        id: 0,
        rand: "00".into(),
        hash: "ff".into(),
    };

    assert_eq!(row.to_string(), "ID 0, rand: 00, hash: ff");
}
