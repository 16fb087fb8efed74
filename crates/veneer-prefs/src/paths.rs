//! OS-aware path detection for preferences storage.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{PrefsError, Result};

/// Application name used for the storage directory.
pub const APP_NAME: &str = "Veneer";

/// Subdirectory holding preferences domains.
pub const PREFERENCES_DIR: &str = "preferences";

/// Returns the veneer data directory for the current OS.
///
/// The `VENEER_DATA_DIR` environment variable overrides the platform
/// default.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(value) = std::env::var("VENEER_DATA_DIR") {
        if !value.is_empty() {
            let path = PathBuf::from(value);
            debug!(path = %path.display(), "using VENEER_DATA_DIR override");
            return Ok(path);
        }
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_NAME))
        .ok_or(PrefsError::DataDirNotFound)
}

/// Returns the file path backing the named preferences domain.
pub fn preferences_path(name: &str) -> Result<PathBuf> {
    Ok(data_dir()?.join(PREFERENCES_DIR).join(format!("{name}.json")))
}
