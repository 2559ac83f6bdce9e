//! Error types for background removal operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for background removal operations
pub type Result<T> = std::result::Result<T, BgRemovalError>;

/// Error types for background removal operations
///
/// There are exactly two failure kinds: the input could not be decoded, or
/// the output could not be encoded. The classification pass itself is pure
/// arithmetic over bounded integers and has no error path.
#[derive(Error, Debug)]
pub enum BgRemovalError {
    /// Input file missing, unreadable, or not a valid/supported image encoding
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        /// Path of the input that failed to decode
        path: PathBuf,
        /// Underlying codec or I/O failure
        #[source]
        source: image::ImageError,
    },

    /// Output path not writable, or the PNG encoding could not be produced
    #[error("failed to encode image '{path}': {source}")]
    Encode {
        /// Path of the output that failed to encode
        path: PathBuf,
        /// Underlying codec or I/O failure
        #[source]
        source: image::ImageError,
    },
}

impl BgRemovalError {
    /// Create a decode error carrying the failing input path
    pub fn decode<P: AsRef<Path>>(path: P, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an encode error carrying the failing output path
    pub fn encode<P: AsRef<Path>>(path: P, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a decode error from a raw I/O failure on the input path
    pub fn decode_io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::decode(path, image::ImageError::IoError(source))
    }

    /// Create an encode error from a raw I/O failure on the output path
    pub fn encode_io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::encode(path, image::ImageError::IoError(source))
    }

    /// The path of the file that failed to decode or encode
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_carries_path() {
        let err = BgRemovalError::decode_io(
            "missing.jpg",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        );
        assert_eq!(err.path(), Path::new("missing.jpg"));
        assert!(matches!(err, BgRemovalError::Decode { .. }));
        assert!(err.to_string().contains("missing.jpg"));
    }

    #[test]
    fn test_encode_error_carries_path() {
        let err = BgRemovalError::encode_io(
            "out/dir/logo.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
        );
        assert_eq!(err.path(), Path::new("out/dir/logo.png"));
        assert!(matches!(err, BgRemovalError::Encode { .. }));
        assert!(err.to_string().contains("failed to encode"));
    }
}
