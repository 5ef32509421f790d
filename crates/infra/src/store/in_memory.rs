use std::sync::RwLock;

use barmaster_core::Entity;

use super::{RecordStore, remove, upsert};
use crate::error::StoreError;

/// In-memory collection for tests/dev.
#[derive(Debug)]
pub struct InMemoryRecordStore<V> {
    inner: RwLock<Vec<V>>,
}

impl<V> InMemoryRecordStore<V> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<V>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

impl<V> Default for InMemoryRecordStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecordStore<V> for InMemoryRecordStore<V>
where
    V: Entity + Clone + Send + Sync + 'static,
{
    fn list(&self) -> Result<Vec<V>, StoreError> {
        let records = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn get(&self, id: &V::Id) -> Result<Option<V>, StoreError> {
        let records = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn save(&self, record: V) -> Result<(), StoreError> {
        let mut records = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        upsert(&mut records, record);
        Ok(())
    }

    fn delete(&self, id: &V::Id) -> Result<bool, StoreError> {
        let mut records = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(remove(&mut records, id))
    }
}
