//! Durable key-value storage port

use crate::error::StorageError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract key-value storage provider
///
/// Values are whole strings read and written in one piece.
pub trait StorageProvider: Send + Sync {
    /// Read the value under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value under `key`
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Reject keys that could name something outside the storage root
fn validate_key(key: &str) -> StorageResult<()> {
    if !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Local filesystem storage provider, one JSON file per key
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage provider with the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl StorageProvider for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.full_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    /// Writes to a temp file then renames to avoid partial writes
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.full_path(key)?;
        std::fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value).map_err(|e| StorageError::BackendError(e.to_string()))?;
        std::fs::rename(&temp_path, &path).map_err(|e| StorageError::BackendError(e.to_string()))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.full_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }
}

/// In-memory storage provider (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut data) = storage.data.write() {
            data.insert(key.into(), value.into());
        }
        storage
    }
}

fn poisoned<E>(_: E) -> StorageError {
    StorageError::BackendError("storage lock poisoned".to_string())
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.data
            .write()
            .map_err(poisoned)?
            .remove(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(())
    }
}
