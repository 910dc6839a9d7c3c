//! String key-value storage for persisted palettes and preferences.
//!
//! The palette code never touches the filesystem directly; it talks to a
//! [`KeyValueStore`]. [`FileStore`] keeps one file per key in a directory,
//! [`MemoryStore`] keeps everything in a map and is what tests use.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying read or write failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Key cannot be mapped onto the backing storage.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Get/set/remove of string blobs under string keys.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// === In-memory store ===

/// A store backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, for tests.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// === File store ===

/// A store keeping each key in its own file under a directory.
///
/// The directory is created on the first write. Keys may only contain ASCII
/// letters, digits, `-`, `_` and `.`, and may not start with a dot.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, value)?;
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
