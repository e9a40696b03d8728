//! SQL for the fixed three-column `bench` table.

pub const DROP_TABLE: &str = "DROP TABLE IF EXISTS bench";

pub const CREATE_TABLE: &str = "CREATE TABLE bench (ID INTEGER PRIMARY KEY ASC, rand TEXT, hash TEXT)";

pub const INSERT_RECORD: &str = "INSERT INTO bench VALUES (?1, ?2, ?3)";

/// Unordered full scan; no ORDER BY so SQLite walks the table as stored.
pub const SELECT_ALL: &str = "SELECT ID, rand, hash FROM bench";

pub const VACUUM: &str = "VACUUM";
