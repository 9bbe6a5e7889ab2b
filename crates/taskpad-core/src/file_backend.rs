//! File-backed storage: one file per key under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::backend::StorageBackend;
use crate::store::StoreError;

/// Stores each key as `<dir>/<key>.json`, read and written synchronously.
///
/// Writes replace the whole file; there is no locking, so concurrent
/// processes over the same directory race (last writer wins).
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(format!("read {key}: {e}"))),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::Backend(format!("create {}: {e}", self.dir.display())))?;
        fs::write(self.path_for(key), value)
            .map_err(|e| StoreError::Backend(format!("write {key}: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(format!("remove {key}: {e}"))),
        }
    }
}
