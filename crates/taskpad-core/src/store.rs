//! Typed key/value access over one serialized record.

use serde_json::{Map, Value};
use tracing::warn;

use crate::backend::StorageBackend;
use crate::record::{RecordKey, StoredRecord};

/// The fixed storage key the whole record lives under.
pub const STORAGE_KEY: &str = "taskpad-store";

/// Errors from the persistence layer.
///
/// Read-side corruption is never an error; only writes and serialization
/// can fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Typed access to the persisted record.
///
/// Every mutation re-reads, merges, and rewrites the full serialized record;
/// there are no partial-field writes and no cross-writer locking, so
/// concurrent writers race on the whole record (last writer wins).
pub struct PersistedStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistedStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the value under `K`, falling back to the key's default when the
    /// record is absent or unreadable, or the key is missing or undecodable.
    ///
    /// Keys recover independently: a corrupt `theme` does not impair
    /// `items`. A legitimately stored falsy value (empty token string,
    /// `false`) is returned as stored, not replaced by the default.
    pub fn get<K: RecordKey>(&self) -> K::Value {
        let Some(record) = self.read_record() else {
            return K::default_value();
        };
        match record.get(K::NAME) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                warn!(key = K::NAME, error = %e, "undecodable stored value, using default");
                K::default_value()
            }),
            None => K::default_value(),
        }
    }

    /// Assign `value` at `K` and rewrite the whole record. An absent or
    /// unparseable record is replaced by the all-defaults record first.
    pub fn set<K: RecordKey>(&self, value: K::Value) -> Result<(), StoreError> {
        let mut record = self.read_record().unwrap_or_else(default_record);
        record.insert(K::NAME.to_string(), serde_json::to_value(value)?);
        self.write_record(record)
    }

    /// Delete `K` from the record. No-op when the record is absent or
    /// unparseable (never resets storage).
    pub fn remove<K: RecordKey>(&self) -> Result<(), StoreError> {
        let Some(mut record) = self.read_record() else {
            return Ok(());
        };
        record.remove(K::NAME);
        self.write_record(record)
    }

    /// Drop the entire backing record.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(STORAGE_KEY)
    }

    /// The raw record as a generic JSON object, `None` when absent,
    /// unreadable, or not an object. Fields outside the typed schema pass
    /// through untouched.
    fn read_record(&self) -> Option<Map<String, Value>> {
        let raw = match self.backend.load(STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "unreadable storage, treating record as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(Value::Object(record)) => Some(record),
            Ok(_) | Err(_) => {
                warn!("malformed stored record, treating as absent");
                None
            }
        }
    }

    fn write_record(&self, record: Map<String, Value>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&Value::Object(record))?;
        self.backend.save(STORAGE_KEY, &raw)
    }
}

/// The all-defaults record: `theme` and `items` at their defaults, `token`
/// omitted.
fn default_record() -> Map<String, Value> {
    match serde_json::to_value(StoredRecord::default()) {
        Ok(Value::Object(record)) => record,
        _ => Map::new(),
    }
}
