//! Error types for record encoding.

use thiserror::Error;

/// Errors that can occur while decoding a stored record.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The stored value is not valid hex.
    #[error("Could not decode hex string '{value}': {source}")]
    InvalidHex {
        value: String,
        #[source]
        source: hex::FromHexError,
    },
}
