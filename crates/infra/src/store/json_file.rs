use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

use barmaster_core::Entity;

use super::{RecordStore, remove, upsert};
use crate::error::StoreError;

/// Collection persisted as one JSON array file.
///
/// Until the file is first written, reads return the seed records; the first
/// write persists the seed together with the change.
#[derive(Debug)]
pub struct JsonFileStore<V> {
    path: PathBuf,
    seed: Vec<V>,
    write_lock: Mutex<()>,
}

impl<V> JsonFileStore<V> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, Vec::new())
    }

    pub fn with_seed(path: impl Into<PathBuf>, seed: Vec<V>) -> Self {
        Self {
            path: path.into(),
            seed,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<V> JsonFileStore<V>
where
    V: Clone + Serialize + DeserializeOwned,
{
    fn read_all(&self) -> Result<Vec<V>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.seed.clone()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    fn write_all(&self, records: &[V]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "wrote collection");
        Ok(())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Vec<V>) -> T) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut records = self.read_all()?;
        let out = f(&mut records);
        self.write_all(&records)?;
        Ok(out)
    }
}

impl<V> RecordStore<V> for JsonFileStore<V>
where
    V: Entity + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn list(&self) -> Result<Vec<V>, StoreError> {
        self.read_all()
    }

    fn get(&self, id: &V::Id) -> Result<Option<V>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|r| r.id() == id))
    }

    fn save(&self, record: V) -> Result<(), StoreError> {
        self.modify(|records| upsert(records, record))
    }

    fn delete(&self, id: &V::Id) -> Result<bool, StoreError> {
        self.modify(|records| remove(records, id))
    }
}
