//! The preferences store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::debug;

use crate::error::{PrefsError, Result};
use crate::paths::preferences_path;

/// The in-memory preferences map shared with the writer thread.
type SharedValues = Arc<RwLock<HashMap<String, Value>>>;

/// A command marshalled onto the writer thread.
enum Command {
    /// Apply a single mutation and persist, then acknowledge.
    Set {
        key: String,
        value: Option<Value>,
        done: mpsc::Sender<Result<()>>,
    },
    /// Persist the current state, then acknowledge.
    Flush { done: mpsc::Sender<Result<()>> },
}

/// A string-keyed store of JSON values persisted as a single file.
///
/// Reads and plain mutations touch only the in-memory map. Persisting
/// operations ([`Preferences::set_synchronously`],
/// [`Preferences::synchronize`]) are marshalled onto the store's single
/// writer thread; the calling thread blocks until the write has run to
/// completion, whichever thread it is called from.
pub struct Preferences {
    values: SharedValues,
    writer: Mutex<mpsc::Sender<Command>>,
    path: PathBuf,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Preferences {
    /// Opens the named preferences domain in the platform data directory.
    pub fn open(name: &str) -> Result<Self> {
        Self::at_path(preferences_path(name)?)
    }

    /// Opens a preferences store backed by the given file.
    ///
    /// An existing file is loaded; a missing one starts the store empty.
    pub fn at_path(path: PathBuf) -> Result<Self> {
        let initial: HashMap<String, Value> = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };

        let values: SharedValues = Arc::new(RwLock::new(initial));
        let (sender, receiver) = mpsc::channel();

        let writer_values = Arc::clone(&values);
        let writer_path = path.clone();
        std::thread::Builder::new()
            .name("veneer-prefs-writer".to_owned())
            .spawn(move || writer_loop(&writer_values, &writer_path, &receiver))?;

        debug!(path = %path.display(), "preferences store opened");

        Ok(Self {
            values,
            writer: Mutex::new(sender),
            path,
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    /// Returns all keys currently present.
    pub fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    /// Sets a value in memory without persisting.
    pub fn set(&self, key: &str, value: Value) {
        self.values.write().insert(key.to_owned(), value);
    }

    /// Removes a value in memory without persisting.
    pub fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }

    /// Persists the current state, blocking until the write completes.
    pub fn synchronize(&self) -> Result<()> {
        let (done, ack) = mpsc::channel();
        self.send(Command::Flush { done })?;
        ack.recv().map_err(|_| PrefsError::WriterStopped)?
    }

    /// Stores the value (or removes the key when `None`) and persists,
    /// blocking until the write has run to completion on the writer thread.
    pub fn set_synchronously(&self, key: &str, value: Option<Value>) -> Result<()> {
        let (done, ack) = mpsc::channel();
        self.send(Command::Set {
            key: key.to_owned(),
            value,
            done,
        })?;
        ack.recv().map_err(|_| PrefsError::WriterStopped)?
    }

    fn send(&self, command: Command) -> Result<()> {
        self.writer
            .lock()
            .send(command)
            .map_err(|_| PrefsError::WriterStopped)
    }
}

/// The writer thread: applies mutations and persists the store, one
/// command at a time, until every sender is gone.
fn writer_loop(
    values: &SharedValues,
    path: &std::path::Path,
    receiver: &mpsc::Receiver<Command>,
) {
    while let Ok(command) = receiver.recv() {
        match command {
            Command::Set { key, value, done } => {
                {
                    let mut map = values.write();
                    match value {
                        Some(value) => {
                            map.insert(key, value);
                        }
                        None => {
                            map.remove(&key);
                        }
                    }
                }
                let _ = done.send(persist(values, path));
            }
            Command::Flush { done } => {
                let _ = done.send(persist(values, path));
            }
        }
    }
}

/// Writes the current state to disk.
fn persist(values: &SharedValues, path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let snapshot = values.read().clone();
    let bytes = serde_json::to_vec_pretty(&snapshot)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
