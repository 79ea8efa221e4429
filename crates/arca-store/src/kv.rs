//! Key-value store backends.
//!
//! Models the browser's local storage: opaque string values under string
//! keys. `MemoryStore` backs tests and ephemeral sessions; `FileStore` keeps
//! one file per key under a directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use arca_core::PersistenceError;

/// The trait that all storage backends implement.
pub trait KeyValueStore {
    /// Read the value under a key, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Surfaces quota/IO failures as `PersistenceError`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove a key. No-op when absent.
    fn remove(&mut self, key: &str);
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed backend: one file per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }
}
