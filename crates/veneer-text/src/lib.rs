//! String additions for `veneer`: validation, manipulation, paths and
//! formatting.
//!
//! - [`ext`]: the [`StrAdditions`] extension trait and small free helpers
//! - [`validate`]: digit/number/email checks and the Luhn checksum
//! - [`paths`]: path-shaped string helpers
//! - [`format`]: locale identifiers and en_US-style number rendering
//!
//! # Examples
//!
//! ```
//! use veneer_text::StrAdditions;
//! use veneer_text::validate::is_valid_luhn;
//!
//! assert!(is_valid_luhn("4532015112830366"));
//! assert_eq!("Hello".reversed(), "olleH");
//! ```

#![warn(missing_docs)]

pub mod ext;
pub mod format;
pub mod paths;
pub mod validate;

pub use ext::{hex_string, joined_lines, StrAdditions, EMPTY, EMPTY_JSON_ARRAY, EMPTY_JSON_OBJECT};
