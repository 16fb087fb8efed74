//! Error types for the preferences store.

use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// IO error during file operations; surfaced verbatim.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error; surfaced verbatim.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform data directory could not be determined.
    #[error("could not determine data directory")]
    DataDirNotFound,

    /// The store's writer thread is no longer running.
    #[error("preferences writer stopped")]
    WriterStopped,
}

/// Result type for preferences operations.
pub type Result<T> = std::result::Result<T, PrefsError>;
