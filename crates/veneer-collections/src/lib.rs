//! Collection and JSON additions for `veneer`.
//!
//! - [`vec_ext`]: set-flavored helpers for vectors
//! - [`map_ext`]: merge and transform helpers for hash maps
//! - [`json`]: safe JSON (de)serialization shims over `serde_json`
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use veneer_collections::MapAdditions;
//!
//! let mut defaults: HashMap<&str, i32> = HashMap::from([("retries", 3), ("timeout", 30)]);
//! let overrides = HashMap::from([("timeout", 60)]);
//!
//! let merged = defaults.merged(&overrides);
//! assert_eq!(merged[&"timeout"], 60);
//! assert_eq!(merged[&"retries"], 3);
//! # defaults.merge(overrides);
//! ```

#![warn(missing_docs)]

pub mod json;
pub mod map_ext;
pub mod vec_ext;

pub use json::{safe_json_array, safe_json_object, JsonError};
pub use map_ext::{compacted, MapAdditions};
pub use vec_ext::VecAdditions;
