//! View-hierarchy utilities for `veneer`.
//!
//! - [`view`]: the retained [`View`] tree with tags, focus, borders and
//!   animations
//! - [`render`]: screenshots of a view tree into a pixmap
//! - [`window`]: windows, window levels and stack queries
//! - [`screen`]: display scale metrics
//! - [`animation`]: timing curves, option flags and keyframe animations
//!
//! # Examples
//!
//! ```
//! use veneer_core::geometry::Rect;
//! use veneer_view::{View, Window, WindowLevel, WindowStack};
//!
//! let mut stack = WindowStack::new();
//! stack.push(Window::new(Rect::new(0.0, 0.0, 320.0, 480.0)));
//! stack.push(Window::at_level(
//!     Rect::new(0.0, 0.0, 320.0, 480.0),
//!     WindowLevel::ALERT,
//! ));
//!
//! assert_eq!(stack.max_level_presented(), WindowLevel::ALERT);
//! ```

#![warn(missing_docs)]

pub mod animation;
pub mod render;
pub mod screen;
pub mod view;
pub mod window;

pub use animation::{Animation, AnimationCurve, AnimationOptions, KeyframeAnimation};
pub use screen::Screen;
pub use view::{EdgeBorder, EdgeMask, View, ViewId};
pub use window::{Window, WindowId, WindowLevel, WindowStack};
