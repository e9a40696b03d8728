//! Core types for sqlite3perf.
//!
//! A [`Record`] is one row of the benchmark dataset: a sequence id, eight
//! random bytes and the SHA-256 digest of those bytes. Both the generator and
//! the verifier agree on the encoding defined here, which is the only contract
//! between them besides the table itself.

pub mod error;
pub mod record;

pub use error::CodecError;
pub use record::{decode_value, digest, digest_hex, Record, DIGEST_LEN, VALUE_LEN};

/// Name of the table holding the generated dataset.
pub const TABLE_NAME: &str = "bench";
