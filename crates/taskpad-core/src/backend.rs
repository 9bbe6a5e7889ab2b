//! Raw string key/value storage backends.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::store::StoreError;

/// Raw key/value storage a [`crate::store::PersistedStore`] sits on top of.
///
/// Values are opaque strings; all structure lives in the store layer.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value under `key`, `None` if never written.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key` entirely. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend for tests and embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value directly, bypassing the store layer. Useful for
    /// pre-populating records, malformed ones included.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.load("k").unwrap(), None);

        backend.save("k", "v").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("v"));

        backend.save("k", "v2").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("v2"));

        backend.remove("k").unwrap();
        assert_eq!(backend.load("k").unwrap(), None);
    }

    #[test]
    fn removing_absent_key_is_not_an_error() {
        let backend = MemoryBackend::new();
        assert!(backend.remove("never-written").is_ok());
    }
}
