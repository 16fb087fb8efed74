//! Core value types for `veneer`.
//!
//! This crate provides the fundamental building blocks shared by the other
//! `veneer` crates:
//!
//! - [`geometry`]: continuous-coordinate `Point`, `Size`, `Rect` and
//!   `EdgeInsets`
//! - [`color`]: RGBA colors with hex parsing and interpolation
//! - [`num`]: numeric interpolation and range helpers
//! - [`calendar`]: month/year arithmetic
//! - [`error`]: error types for the core library
//!
//! # Examples
//!
//! ```
//! use veneer_core::geometry::{Point, Rect};
//! use veneer_core::color::Color;
//!
//! let rect = Rect::new(0.5, 0.5, 10.2, 4.7);
//! let snapped = rect.ceiled();
//! assert_eq!(snapped, Rect::new(0.0, 0.0, 11.0, 5.0));
//!
//! let tint = Color::from_hex("#11AA22").unwrap();
//! assert!(tint.is_opaque());
//! ```

#![warn(missing_docs)]

pub mod calendar;
pub mod color;
pub mod error;
pub mod geometry;
pub mod num;

// Re-export commonly used types at the crate root for convenience.
pub use color::Color;
pub use error::ColorParseError;
pub use geometry::{EdgeInsets, Point, Rect, Size};
