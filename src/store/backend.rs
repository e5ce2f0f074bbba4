//! Key-value backends for persisted theme data
//!
//! Values are opaque strings. The theme store owns the JSON encoding.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::error::StorageError;

/// String key-value storage shared by every controller in the process.
///
/// Implementations must be safe to share between threads; each call is
/// independent and there are no transactions.
pub trait ThemeStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Delete a key. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    values: HashMap<String, String>,
    unavailable: bool,
    quota: Option<usize>,
}

/// In-memory store. Can be switched off or given a byte quota to behave
/// like a disabled or full browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once the total stored bytes exceed `limit`
    pub fn with_quota(limit: usize) -> Self {
        let store = Self::default();
        store.state.lock().quota = Some(limit);
        store
    }

    /// Toggle availability. An unavailable store fails every call.
    pub fn set_available(&self, available: bool) {
        self.state.lock().unavailable = !available;
    }

    /// Raw value, bypassing availability (for inspection)
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.lock().values.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.state.lock();
        if state.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(state.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        if state.unavailable {
            return Err(StorageError::Unavailable);
        }
        if let Some(limit) = state.quota {
            let others: usize = state
                .values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let bytes = others + value.len();
            if bytes > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    bytes,
                    limit,
                });
            }
        }
        state.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        if state.unavailable {
            return Err(StorageError::Unavailable);
        }
        state.values.remove(key);
        Ok(())
    }
}

/// Store that keeps one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(io_error(
                &self.dir.join(key),
                io::Error::new(io::ErrorKind::InvalidInput, "invalid storage key"),
            ));
        }
        Ok(self.dir.join(key))
    }
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl ThemeStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    #[instrument(name = "file_store_set", skip(self, value), fields(bytes = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.dir.join(format!(".{}.tmp", key));
        fs::write(&temp_path, value).map_err(|e| io_error(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| io_error(&path, e))?;

        debug!(path = %path.display(), "Persisted store value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}
