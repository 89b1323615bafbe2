//! Error types for Launch Shelf.
//!
//! Only two kinds of error ever reach a caller: a shortcuts directory that
//! cannot be scanned at all, and a launch that could not be started. Sidecar
//! and icon problems are represented here for diagnostics but are always
//! absorbed by the resolver and builder.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher shelf.
#[derive(Debug, Error)]
pub enum ShelfError {
    // Scan errors
    #[error("Shortcuts directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<io::Error>,
    },

    // Sidecar errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Icon errors
    #[error("Icon unavailable at {path}: {reason}")]
    IconUnavailable { path: PathBuf, reason: String },

    // Launch errors
    #[error("Failed to launch {target}: {reason}")]
    LaunchFailed {
        target: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

impl From<io::Error> for ShelfError {
    fn from(err: io::Error) -> Self {
        ShelfError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ShelfError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: io::Error, path: impl Into<PathBuf>) -> Self {
        ShelfError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Classify a failure to open a directory for scanning.
    pub fn from_read_dir(err: io::Error, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        match err.kind() {
            io::ErrorKind::NotFound => ShelfError::DirectoryNotFound(dir),
            io::ErrorKind::PermissionDenied => ShelfError::PermissionDenied(dir),
            io::ErrorKind::NotADirectory => ShelfError::NotADirectory(dir),
            _ if dir.is_file() => ShelfError::NotADirectory(dir),
            _ => ShelfError::io_with_path(err, dir),
        }
    }

    /// Create a launch failure carrying the underlying OS error.
    pub fn launch_failed(
        target: impl Into<PathBuf>,
        reason: impl Into<String>,
        source: Option<io::Error>,
    ) -> Self {
        ShelfError::LaunchFailed {
            target: target.into(),
            reason: reason.into(),
            source,
        }
    }

    /// True for the errors that mean a directory could not be scanned at all.
    ///
    /// Front ends use this to decide between an empty-state view and aborting.
    pub fn is_fatal_scan_error(&self) -> bool {
        matches!(
            self,
            ShelfError::DirectoryNotFound(_)
                | ShelfError::PermissionDenied(_)
                | ShelfError::NotADirectory(_)
                | ShelfError::Io { .. }
        )
    }

    /// True if this error came from the launch dispatcher.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ShelfError::LaunchFailed { .. })
    }
}
