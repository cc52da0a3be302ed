//! Error types shared by every reader

use std::io;
use std::path::{Path, PathBuf};

use imageproc::image::ImageError;

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// Coarse category of a [`ReadError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Deserialization,
    Parse,
    Decode,
    InvalidFormat,
    NotImplemented,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to unpickle {}: {source}", path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_pickle::Error,
    },

    #[error("failed to parse json {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("failed to open archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to read array from {}: {source}", path.display())]
    Array {
        path: PathBuf,
        #[source]
        source: ndarray_npy::ReadNpyError,
    },

    #[error("{} has no array named '{key}'", path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("{reason}: {}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("{reason}: {}", path.display())]
    NotImplemented { path: PathBuf, reason: &'static str },
}

impl ReadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::NotFound { .. } => ErrorKind::NotFound,
            ReadError::Io { .. } => ErrorKind::Io,
            ReadError::Deserialization { .. } => ErrorKind::Deserialization,
            ReadError::Parse { .. } => ErrorKind::Parse,
            ReadError::Decode { .. } | ReadError::Archive { .. } | ReadError::Array { .. } => {
                ErrorKind::Decode
            }
            ReadError::MissingKey { .. } | ReadError::InvalidFormat { .. } => {
                ErrorKind::InvalidFormat
            }
            ReadError::NotImplemented { .. } => ErrorKind::NotImplemented,
        }
    }

    /// The file the failing read was pointed at.
    pub fn path(&self) -> &Path {
        match self {
            ReadError::NotFound { path }
            | ReadError::Io { path, .. }
            | ReadError::Deserialization { path, .. }
            | ReadError::Parse { path, .. }
            | ReadError::Decode { path, .. }
            | ReadError::Archive { path, .. }
            | ReadError::Array { path, .. }
            | ReadError::MissingKey { path, .. }
            | ReadError::InvalidFormat { path, .. }
            | ReadError::NotImplemented { path, .. } => path,
        }
    }

    /// Map an io error, folding `ErrorKind::NotFound` into [`ReadError::NotFound`].
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ReadError::NotFound {
                path: path.to_owned(),
            }
        } else {
            ReadError::Io {
                path: path.to_owned(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = ReadError::io(
            Path::new("a/b.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Path::new("a/b.txt"));
    }

    #[test]
    fn other_io_errors_stay_io() {
        let err = ReadError::io(
            Path::new("x"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
