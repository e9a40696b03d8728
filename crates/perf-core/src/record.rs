//! Record definition and the digest/hex helpers shared by generate and bench.

use crate::error::CodecError;
use sha2::{Digest, Sha256};

/// Size of the random value in bytes.
///
/// Eight bytes keeps the hashed input inside a single SHA-256 block.
pub const VALUE_LEN: usize = 8;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// One generated row of the benchmark table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub value: [u8; VALUE_LEN],
    pub hash: [u8; DIGEST_LEN],
}

impl Record {
    /// Build a record for `value`, computing its digest.
    pub fn new(id: u64, value: [u8; VALUE_LEN]) -> Self {
        Self {
            id,
            value,
            hash: digest(&value),
        }
    }

    /// Lowercase hex encoding of the value, as stored in the `rand` column.
    pub fn value_hex(&self) -> String {
        hex::encode(self.value)
    }

    /// Lowercase hex encoding of the digest, as stored in the `hash` column.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// SHA-256 over `bytes`.
pub fn digest(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(bytes).into()
}

/// Lowercase hex SHA-256 over `bytes`.
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(digest(bytes))
}

/// Decode a stored `rand` column back into raw bytes.
///
/// Any valid hex string is accepted regardless of its length; the digest
/// comparison is what decides whether the row is correct.
pub fn decode_value(value: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(value).map_err(|source| CodecError::InvalidHex {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_vector() {
        assert_eq!(
            digest_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_record_hex_lengths() {
        let record = Record::new(7, [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03]);

        assert_eq!(record.value_hex(), "deadbeef00010203");
        assert_eq!(record.value_hex().len(), 2 * VALUE_LEN);
        assert_eq!(record.hash_hex().len(), 2 * DIGEST_LEN);
        assert_eq!(record.hash_hex(), record.hash_hex().to_lowercase());
    }

    #[test]
    fn test_record_hash_matches_value() {
        let record = Record::new(0, *b"12345678");
        let decoded = decode_value(&record.value_hex()).unwrap();

        assert_eq!(decoded, b"12345678");
        assert_eq!(digest_hex(&decoded), record.hash_hex());
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let err = decode_value("not-hex!").unwrap_err();
        assert!(err.to_string().contains("not-hex!"));
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(decode_value("abc").is_err());
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode_value("DEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
