//! Error types for the storage adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::BenchStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("Error while opening database '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Dropping the table failed.
    #[error("Could not delete table 'bench' for (re-)generation of data: {0}")]
    DropTable(#[source] rusqlite::Error),

    /// Creating the table failed.
    #[error("Could not create table 'bench': {0}")]
    CreateTable(#[source] rusqlite::Error),

    /// A statement could not be prepared.
    #[error("Could not prepare statement: {0}")]
    Prepare(#[source] rusqlite::Error),

    /// Writing a record failed.
    #[error("Inserting values into database failed for ID {id}: {source}")]
    Insert {
        id: u64,
        #[source]
        source: rusqlite::Error,
    },

    /// Record id does not fit SQLite's signed 64-bit integer.
    #[error("Record ID {0} exceeds the SQLite integer range")]
    IdOutOfRange(u64),

    /// Running the scan query failed.
    #[error("Query failed: {0}")]
    Query(#[source] rusqlite::Error),

    /// Fetching or reading a row of the scan failed.
    #[error("Reading row failed: {0}")]
    Row(#[source] rusqlite::Error),

    /// VACUUM failed.
    #[error("Vacuuming database failed: {0}")]
    Vacuum(#[source] rusqlite::Error),
}
