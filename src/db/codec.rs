//! Blob encoding for timing sequences
//!
//! Press and interval times are stored as opaque BLOB columns. Each blob is a
//! bincode-encoded `Vec<i64>`: a little-endian `u64` element count followed by
//! one fixed-width little-endian `i64` per element. The count prefix makes the
//! blob self-describing, so no external length column is needed.

use bincode::Options;
use thiserror::Error;

/// Errors produced while converting stored columns to and from their Rust form
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to encode timing sequence: {0}")]
    Encode(#[source] bincode::Error),

    #[error("malformed timing sequence: {0}")]
    Decode(#[source] bincode::Error),

    #[error("stored password is not valid UTF-8")]
    PasswordEncoding(#[from] std::string::FromUtf8Error),
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Encode a timing sequence into its blob form
///
/// Encoding a slice of integers has no failure path in bincode; the `Result`
/// only mirrors the serializer signature.
pub fn encode(values: &[i64]) -> Result<Vec<u8>, CodecError> {
    options().serialize(values).map_err(CodecError::Encode)
}

/// Decode a blob produced by [`encode`]
///
/// Truncated input, a count prefix that overruns the buffer, and trailing
/// bytes after the last element are all rejected.
pub fn decode(bytes: &[u8]) -> Result<Vec<i64>, CodecError> {
    options().deserialize(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_keeps_order_and_sign() {
        let values = vec![120, -3, 0, i64::MAX, i64::MIN, 87, 87];
        let bytes = encode(&values).unwrap();
        assert_eq!(decode(&bytes).unwrap(), values);
    }

    #[test]
    fn test_round_trip_empty_sequence() {
        let bytes = encode(&[]).unwrap();
        assert_eq!(bytes.len(), 8);
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_layout_is_count_then_elements() {
        let bytes = encode(&[1, -1]).unwrap();
        assert_eq!(bytes.len(), 8 + 2 * 8);
        assert_eq!(&bytes[..8], &2u64.to_le_bytes());
        assert_eq!(&bytes[8..16], &1i64.to_le_bytes());
        assert_eq!(&bytes[16..], &(-1i64).to_le_bytes());
    }

    #[test]
    fn test_decode_rejects_truncated_blob() {
        let bytes = encode(&[10, 20, 30]).unwrap();
        let truncated = &bytes[..bytes.len() - 3];
        assert!(matches!(decode(truncated), Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_missing_count() {
        assert!(matches!(decode(&[]), Err(CodecError::Decode(_))));
        assert!(matches!(decode(&[1, 0, 0]), Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = encode(&[5, 6]).unwrap();
        bytes.push(0xff);
        assert!(matches!(decode(&bytes), Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_oversized_count() {
        // Count claims a billion elements but no element bytes follow
        let bytes = 1_000_000_000u64.to_le_bytes();
        assert!(matches!(decode(&bytes), Err(CodecError::Decode(_))));
    }
}
