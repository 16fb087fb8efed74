//! Error types for pixmap operations.

use thiserror::Error;

/// Error type for pixmap codec operations.
#[derive(Error, Debug)]
pub enum PixmapError {
    /// The underlying image codec failed; surfaced verbatim.
    #[error(transparent)]
    Codec(#[from] image::ImageError),
}

/// Result type alias for pixmap operations.
pub type Result<T> = std::result::Result<T, PixmapError>;
