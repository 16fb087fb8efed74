//! RGBA pixel buffers and image effects for `veneer`.
//!
//! The central type is [`Pixmap`], an owned RGBA8 bitmap with:
//!
//! - [`pixmap`]: construction, pixel access and size queries
//! - [`effects`]: the blur / saturation / tint pipeline and its presets
//! - [`ops`]: mirroring, inversion, rotation, rounding, scaling, combining
//! - [`codec`]: PNG encoding and decoding
//!
//! # Examples
//!
//! ```
//! use veneer_core::color::Color;
//! use veneer_image::{BlurParams, Pixmap};
//!
//! let photo = Pixmap::filled(32, 32, Color::rgb(0.8, 0.3, 0.1));
//!
//! // A dark translucent overlay backdrop.
//! let backdrop = photo.dark_effect().unwrap();
//! assert_eq!(backdrop.dimensions(), (32, 32));
//!
//! // Custom parameters.
//! let subtle = photo
//!     .blurred(&BlurParams { radius: 2.0, ..BlurParams::default() }, None)
//!     .unwrap();
//! assert_eq!(subtle.dimensions(), (32, 32));
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod effects;
pub mod error;
pub mod ops;
pub mod pixmap;

pub use codec::media_type_for_extension;
pub use effects::BlurParams;
pub use error::{PixmapError, Result};
pub use pixmap::Pixmap;
