//! Veneer: convenience additions for UI-framework value types.
//!
//! This crate bundles a set of focused member crates into one surface:
//!
//! - geometry, colors and interpolation ([`core`])
//! - string validation, manipulation and formatting ([`text`])
//! - collection helpers and safe JSON shims ([`collections`])
//! - an RGBA pixel buffer with blur/tint effects ([`image`])
//! - view-hierarchy, window and animation utilities ([`view`])
//! - a blocking shim over the async HTTP client ([`net`])
//! - a user-preferences store ([`prefs`])
//!
//! # Example
//!
//! ```
//! use veneer::prelude::*;
//!
//! let accent = Color::from_hex("#4A90D9").unwrap();
//!
//! let mut badge = View::new(Rect::new(0.0, 0.0, 24.0, 24.0));
//! badge.background = Some(accent);
//! badge.corner_radius = badge.frame.size.max_corner_radius();
//!
//! let rendered = badge.screenshot(2.0).unwrap();
//! assert_eq!(rendered.dimensions(), (48, 48));
//! ```

pub use veneer_collections as collections;
pub use veneer_core as core;
pub use veneer_image as image;
pub use veneer_net as net;
pub use veneer_prefs as prefs;
pub use veneer_text as text;
pub use veneer_view as view;

pub mod prelude {
    //! The most commonly used types, re-exported in one place.

    pub use veneer_collections::{MapAdditions, VecAdditions};
    pub use veneer_core::color::Color;
    pub use veneer_core::geometry::{EdgeInsets, Point, Rect, Size};
    pub use veneer_image::{BlurParams, Pixmap};
    pub use veneer_net::FetchResult;
    pub use veneer_prefs::Preferences;
    pub use veneer_text::StrAdditions;
    pub use veneer_view::{
        Animation, AnimationCurve, AnimationOptions, EdgeMask, KeyframeAnimation, Screen, View,
        Window, WindowLevel, WindowStack,
    };
}
