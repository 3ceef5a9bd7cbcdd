//! In-memory backend implementation.
//!
//! Records live in a `HashMap` behind a `parking_lot::RwLock`. Nothing is
//! persisted; dropping the store drops every record.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::RecordStore;
use crate::error::{ResourceError, StorageError, StorageResult};
use crate::types::StoredRecord;

type RecordKey = (String, String);

/// Non-persistent record store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<RecordKey, String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records across all resource types.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

fn key(resource_type: &str, id: &str) -> RecordKey {
    (resource_type.to_string(), id.to_string())
}

#[async_trait]
impl RecordStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, resource_type: &str, id: &str) -> StorageResult<Option<StoredRecord>> {
        let records = self.records.read();
        Ok(records
            .get(&key(resource_type, id))
            .map(|payload| StoredRecord::new(resource_type, id, payload.clone())))
    }

    async fn replace(&self, record: StoredRecord) -> StorageResult<bool> {
        let mut records = self.records.write();
        match records.get_mut(&key(record.resource_type(), record.id())) {
            Some(payload) => {
                *payload = record.into_payload();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert(&self, record: StoredRecord) -> StorageResult<()> {
        let mut records = self.records.write();
        let key = key(record.resource_type(), record.id());
        if records.contains_key(&key) {
            return Err(StorageError::Resource(ResourceError::AlreadyExists {
                resource_type: key.0,
                id: key.1,
            }));
        }
        records.insert(key, record.into_payload());
        Ok(())
    }

    async fn delete(&self, resource_type: &str, id: &str) -> StorageResult<bool> {
        Ok(self
            .records
            .write()
            .remove(&key(resource_type, id))
            .is_some())
    }

    async fn count(&self, resource_type: &str) -> StorageResult<u64> {
        let records = self.records.read();
        Ok(records.keys().filter(|(t, _)| t == resource_type).count() as u64)
    }
}
