//! Keyed record storage abstractions.

pub mod in_memory;
pub mod json_file;

use std::sync::Arc;

use barmaster_core::Entity;

use crate::error::StoreError;

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileStore;

/// One durable collection keyed by the record's identity.
///
/// `list` preserves insertion order; `save` replaces a record in place when its
/// id already exists and appends otherwise.
pub trait RecordStore<V: Entity>: Send + Sync {
    fn list(&self) -> Result<Vec<V>, StoreError>;
    fn get(&self, id: &V::Id) -> Result<Option<V>, StoreError>;
    fn save(&self, record: V) -> Result<(), StoreError>;
    /// Returns whether a record was removed.
    fn delete(&self, id: &V::Id) -> Result<bool, StoreError>;
}

impl<V, S> RecordStore<V> for Arc<S>
where
    V: Entity,
    S: RecordStore<V> + ?Sized,
{
    fn list(&self) -> Result<Vec<V>, StoreError> {
        (**self).list()
    }

    fn get(&self, id: &V::Id) -> Result<Option<V>, StoreError> {
        (**self).get(id)
    }

    fn save(&self, record: V) -> Result<(), StoreError> {
        (**self).save(record)
    }

    fn delete(&self, id: &V::Id) -> Result<bool, StoreError> {
        (**self).delete(id)
    }
}

/// Upsert by id into an ordered collection.
pub(crate) fn upsert<V: Entity>(records: &mut Vec<V>, record: V) {
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

/// Remove by id; returns whether anything was removed.
pub(crate) fn remove<V: Entity>(records: &mut Vec<V>, id: &V::Id) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}
