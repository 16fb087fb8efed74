//! Error types for core value-type operations.

use thiserror::Error;

/// Error type for color parsing and construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3, 4, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal digit.
    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),

    /// Component slice had an unsupported count.
    #[error("invalid component count: {0} (expected 2, 3, or 4)")]
    InvalidComponentCount(usize),
}
