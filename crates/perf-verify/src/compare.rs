//! Per-row digest check.

use crate::error::VerifyError;
use perf_core::{decode_value, digest_hex, CodecError};
use perf_store::StoredRow;

/// Outcome of checking one row that did not fail the run.
#[derive(Debug)]
pub enum RowCheck {
    /// The stored hash matches the value.
    Verified,
    /// The stored value is not valid hex; the row is skipped.
    Undecodable(CodecError),
}

/// Recompute the digest of `row.rand` and compare it with `row.hash`.
///
/// The comparison is on the lowercase hex text, exactly as stored.
pub fn check_row(row: &StoredRow) -> Result<RowCheck, VerifyError> {
    let value = match decode_value(&row.rand) {
        Ok(value) => value,
        Err(e) => return Ok(RowCheck::Undecodable(e)),
    };

    let computed = digest_hex(&value);
    if computed != row.hash {
        return Err(VerifyError::HashMismatch {
            id: row.id,
            computed,
            stored: row.hash.clone(),
        });
    }

    Ok(RowCheck::Verified)
}
