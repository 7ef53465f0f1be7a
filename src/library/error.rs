//! Library-specific error types
//!
//! Only exceptional failures live here. Domain negatives (tag not found,
//! deletion needs confirmation) are ordinary result variants on the manager
//! operations, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the library store and manager
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The operation requires an existing library and none was found at the
    /// root. Never auto-recovered; run `init` first.
    #[error("no tag library found at {}: run 'tptags init' first", .0.display())]
    NotInitialized(PathBuf),

    /// The persisted document exists but is not well-formed JSON. Fatal for
    /// the requested operation; never replaced with a fresh document.
    #[error("tag library at {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the document failed. The in-memory mutation is
    /// discarded so the caller's view stays consistent with disk.
    #[error("failed to access tag library: {0}")]
    Persistence(#[from] std::io::Error),

    /// Serializing the document failed
    #[error("failed to serialize tag library: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, LibraryError>;
