//! Durable key/value layer, the shape of the browser's local storage.
//!
//! One JSON object on disk, string keys to string values. The in-memory
//! implementation backs unit tests; `FileKv` is the durable one.

use pegasus_core::PegasusError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String key/value storage with last-write-wins semantics
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PegasusError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PegasusError>;
    fn remove(&self, key: &str) -> Result<(), PegasusError>;
}

/// In-memory storage for tests. Not durable.
#[derive(Default)]
pub struct MemoryKv {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, PegasusError> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PegasusError> {
        self.inner.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PegasusError> {
        self.inner.lock().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed storage: a single JSON object rewritten on every change.
pub struct FileKv {
    path: PathBuf,
    inner: Mutex<HashMap<String, String>>,
}

impl FileKv {
    /// Open the store, loading any existing snapshot. A missing file is an
    /// empty store; a corrupt file degrades to empty rather than failing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PegasusError> {
        let path = path.as_ref().to_path_buf();
        let inner = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("discarding corrupt kv snapshot at {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(PegasusError::Store(format!("read {}: {}", path.display(), e))),
        };
        Ok(Self { path, inner: Mutex::new(inner) })
    }

    fn flush(&self, map: &HashMap<String, String>) -> Result<(), PegasusError> {
        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| PegasusError::Store(format!("encode: {}", e)))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| PegasusError::Store(format!("write {}: {}", self.path.display(), e)))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, PegasusError> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PegasusError> {
        let mut map = self.inner.lock().unwrap();
        map.insert(key.to_string(), value.to_string());
        self.flush(&map)
    }

    fn remove(&self, key: &str) -> Result<(), PegasusError> {
        let mut map = self.inner.lock().unwrap();
        map.remove(key);
        self.flush(&map)
    }
}
