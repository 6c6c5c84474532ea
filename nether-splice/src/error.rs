//! Error types for SPLICE decoding

use std::io;
use std::path::PathBuf;

/// Errors that can occur when decoding a SPLICE pattern
#[derive(Debug, thiserror::Error)]
pub enum SpliceError {
    /// Magic bytes did not read "SPLICE"
    #[error("invalid header (expected 'SPLICE')")]
    InvalidHeader,

    /// Read failure or truncation while decoding
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The pattern file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SpliceError {
    /// True when the stream ended in the middle of a field
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SpliceError::InvalidHeader.to_string(),
            "invalid header (expected 'SPLICE')"
        );

        let err = SpliceError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert_eq!(err.to_string(), "IO error: eof");

        let err = SpliceError::Open {
            path: PathBuf::from("missing.splice"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to open missing.splice: not found");
    }

    #[test]
    fn test_is_truncated() {
        assert!(SpliceError::from(io::Error::from(io::ErrorKind::UnexpectedEof)).is_truncated());
        assert!(!SpliceError::from(io::Error::from(io::ErrorKind::InvalidData)).is_truncated());
        assert!(!SpliceError::InvalidHeader.is_truncated());
    }
}
