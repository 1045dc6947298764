use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// A non-fatal problem encountered while reading a directory.
///
/// Enumeration never aborts over these — an unreadable directory is treated
/// as empty and traversal continues with the rest of the frontier. Callers
/// that want visibility register an [`ErrorCallback`] on the builder.
#[derive(Error, Debug)]
pub enum EnumError {
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("path not found")]
    NotFound(PathBuf),

    #[error("not a directory")]
    NotADirectory(PathBuf),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EnumError {
    /// The path this error occurred at.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. } => p,
        }
    }

    /// Classify an `io::Error` raised while opening or reading `path`.
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            _ => Self::Io { path, source },
        }
    }
}

/// Callback invoked when a directory is skipped as unreadable.
///
/// Receives the path where the error occurred and the error itself. This
/// lets callers log or collect skipped directories without changing how
/// the enumerator degrades (the directory still enumerates as empty).
pub type ErrorCallback = Arc<dyn Fn(&Path, &EnumError) + Send + Sync>;
