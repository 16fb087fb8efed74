//! User-preferences storage for `veneer`.
//!
//! A [`Preferences`] store holds string-keyed JSON values in a single file
//! under the platform data directory (or any explicit path). Reads are
//! served from memory; persisting writes are marshalled onto the store's
//! writer thread and block the caller until they have run to completion.
//!
//! # Examples
//!
//! ```no_run
//! use serde_json::Value;
//! use veneer_prefs::Preferences;
//!
//! let prefs = Preferences::open("standard")?;
//! prefs.set_synchronously("launch-count", Some(Value::from(3)))?;
//! assert_eq!(prefs.get("launch-count"), Some(Value::from(3)));
//! # Ok::<(), veneer_prefs::PrefsError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod paths;
pub mod store;

use once_cell::sync::OnceCell;
use serde_json::Value;

pub use error::{PrefsError, Result};
pub use store::Preferences;

/// Name of the shared standard preferences domain.
pub const STANDARD_DOMAIN: &str = "standard";

static STANDARD: OnceCell<Preferences> = OnceCell::new();

/// Returns the shared standard preferences store, opening it on first use.
pub fn standard() -> Result<&'static Preferences> {
    STANDARD.get_or_try_init(|| Preferences::open(STANDARD_DOMAIN))
}

/// Stores a value into the standard preferences synchronously.
///
/// `None` removes the key. Blocks until the write has completed.
pub fn save_synchronously_to_standard(key: &str, value: Option<Value>) -> Result<()> {
    standard()?.set_synchronously(key, value)
}
