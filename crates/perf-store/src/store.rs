//! `BenchStore` and its statement wrappers.

use crate::error::StoreError;
use crate::schema;
use perf_core::{Record, TABLE_NAME};
use rusqlite::{params, Connection, Row, Statement};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Connection to the benchmark database.
pub struct BenchStore {
    conn: Connection,
    location: String,
}

impl BenchStore {
    /// Open (or create) the database file at `path`.
    ///
    /// `:memory:` opens a private in-memory database.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            conn,
            location: path.display().to_string(),
        })
    }

    /// Where this store lives, for log output.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn drop_table(&self) -> Result<(), StoreError> {
        self.conn
            .execute(schema::DROP_TABLE, [])
            .map_err(StoreError::DropTable)?;
        Ok(())
    }

    pub fn create_table(&self) -> Result<(), StoreError> {
        self.conn
            .execute(schema::CREATE_TABLE, [])
            .map_err(StoreError::CreateTable)?;
        Ok(())
    }

    /// Drop any existing table and create an empty one. Destroys all data.
    pub fn recreate_table(&self) -> Result<(), StoreError> {
        info!("Dropping table '{}' if already present", TABLE_NAME);
        self.drop_table()?;
        info!("(Re-)creating table '{}'", TABLE_NAME);
        self.create_table()
    }

    /// Prepare the single-row INSERT used by the generator.
    pub fn writer(&self) -> Result<RecordWriter<'_>, StoreError> {
        let stmt = self
            .conn
            .prepare(schema::INSERT_RECORD)
            .map_err(StoreError::Prepare)?;
        Ok(RecordWriter { stmt })
    }

    /// Prepare the full-table scan used by the verifier.
    pub fn scan(&self) -> Result<RowScan<'_>, StoreError> {
        let stmt = self
            .conn
            .prepare(schema::SELECT_ALL)
            .map_err(StoreError::Query)?;
        Ok(RowScan { stmt })
    }

    /// Compact the database file.
    pub fn vacuum(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(schema::VACUUM)
            .map_err(StoreError::Vacuum)
    }
}

/// Prepared INSERT writing one record per call.
pub struct RecordWriter<'conn> {
    stmt: Statement<'conn>,
}

impl RecordWriter<'_> {
    pub fn write(&mut self, record: &Record) -> Result<(), StoreError> {
        let id = i64::try_from(record.id).map_err(|_| StoreError::IdOutOfRange(record.id))?;
        self.stmt
            .execute(params![id, record.value_hex(), record.hash_hex()])
            .map_err(|source| StoreError::Insert {
                id: record.id,
                source,
            })?;
        Ok(())
    }
}

/// One row as read back from the table, still hex encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub id: i64,
    pub rand: String,
    pub hash: String,
}

impl StoredRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            rand: row.get(1)?,
            hash: row.get(2)?,
        })
    }
}

impl fmt::Display for StoredRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID {}, rand: {}, hash: {}", self.id, self.rand, self.hash)
    }
}

/// Prepared full-table scan.
pub struct RowScan<'conn> {
    stmt: Statement<'conn>,
}

impl RowScan<'_> {
    /// Step through every row, handing each to `visit`.
    ///
    /// Stops at the first error, whether it comes from SQLite or from
    /// `visit` itself.
    pub fn for_each<E, F>(&mut self, mut visit: F) -> Result<(), E>
    where
        E: From<StoreError>,
        F: FnMut(StoredRow) -> Result<(), E>,
    {
        let mut rows = self.stmt.query([]).map_err(StoreError::Query)?;
        while let Some(row) = rows.next().map_err(StoreError::Row)? {
            let stored = StoredRow::from_row(row).map_err(StoreError::Row)?;
            visit(stored)?;
        }
        Ok(())
    }
}
