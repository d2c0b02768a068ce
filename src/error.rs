//! Error types for ctrie.

use thiserror::Error;

/// Error type for ctrie operations.
///
/// Only the codec boundary produces errors. Inserting and querying an
/// in-memory tree never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The stream is not a compressed trie, or is truncated or malformed.
    #[error("invalid file format: {0}")]
    InvalidFormat(String),

    /// The magic matched but the format revision is not supported.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// A value does not fit the field width of the binary format.
    #[error("{what} exceeds encoding limit: {actual} > {limit}")]
    EncodingLimitExceeded {
        what: &'static str,
        limit: u64,
        actual: u64,
    },

    /// IO error from the underlying byte stream, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidFormat(msg.into())
    }

    /// Map a read error, treating a premature end of stream as truncation.
    pub(crate) fn from_read(err: std::io::Error, context: &str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::InvalidFormat(format!("truncated stream while reading {}", context))
        } else {
            Error::Io(err)
        }
    }
}

/// Result type alias for ctrie operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_eof_becomes_invalid_format() {
        let err = Error::from_read(io::Error::from(io::ErrorKind::UnexpectedEof), "label");
        assert!(matches!(err, Error::InvalidFormat(ref m) if m.contains("label")));
    }

    #[test]
    fn test_other_io_errors_pass_through() {
        let err = Error::from_read(io::Error::from(io::ErrorKind::PermissionDenied), "header");
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_limit_message() {
        let err = Error::EncodingLimitExceeded {
            what: "label length",
            limit: 65535,
            actual: 70000,
        };
        assert_eq!(
            err.to_string(),
            "label length exceeds encoding limit: 70000 > 65535"
        );
    }
}
