use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning a ROM directory or persisting browse state.
///
/// Scan-side variants never reach the catalog's callers: they are logged
/// and the catalog falls back to empty.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The root path does not resolve to a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory exists but cannot be listed
    #[error("Cannot read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file could not be read or written
    #[error("State file {} unavailable: {source}", .path.display())]
    PersistenceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file exists but its layout is not understood
    #[error("Malformed state file {}: {reason}", .path.display())]
    MalformedState { path: PathBuf, reason: String },
}

impl CatalogError {
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PersistenceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedState {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
