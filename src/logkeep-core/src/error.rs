//! Error types for log inspection and rotation.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while inspecting or rotating a log file.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The path does not exist or is not a regular file.
    #[error("Could not locate a file at: {}", path.display())]
    NotFound { path: PathBuf },

    /// The process lacks the rights to read, copy or truncate the path.
    #[error("Insufficient permissions to access file: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LogError>;

impl LogError {
    /// Classify a raw I/O error raised while operating on `path`.
    ///
    /// Missing paths (including a non-directory path component) become
    /// [`LogError::NotFound`], access failures become
    /// [`LogError::PermissionDenied`]; everything else is kept as
    /// [`LogError::Io`].
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => LogError::NotFound { path },
            io::ErrorKind::PermissionDenied => LogError::PermissionDenied { path, source },
            _ => LogError::Io { path, source },
        }
    }

    /// Build a [`LogError::NotFound`] for `path`.
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        LogError::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            LogError::NotFound { path }
            | LogError::PermissionDenied { path, .. }
            | LogError::Io { path, .. } => path,
        }
    }

    /// Whether this is one of the two conditions a user can be told how to fix
    /// (missing file or insufficient permissions).
    pub fn is_handled(&self) -> bool {
        matches!(
            self,
            LogError::NotFound { .. } | LogError::PermissionDenied { .. }
        )
    }
}
