//! Core record storage trait.
//!
//! This module defines the [`RecordStore`] trait, the key-value table the
//! REST handlers read and write. Records are addressed by resource type and
//! logical id; payloads are stored and returned verbatim.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::StoredRecord;

/// Keyed storage for resource payloads.
///
/// Implementations own their concurrency control. Every method may be called
/// from many tasks at once. [`insert`](RecordStore::insert) and
/// [`replace`](RecordStore::replace) must check for an existing record and
/// write in one atomic step.
///
/// # Example
///
/// ```ignore
/// use carebase_persistence::core::RecordStore;
/// use carebase_persistence::types::StoredRecord;
///
/// async fn example<S: RecordStore>(store: &S) -> StorageResult<()> {
///     let record = StoredRecord::new("Patient", "123", r#"{"resourceType":"Patient","id":"123"}"#);
///
///     // Create
///     store.insert(record.clone()).await?;
///
///     // Read
///     let read = store.get("Patient", "123").await?;
///     assert_eq!(read.as_ref(), Some(&record));
///
///     // Replace
///     let updated = StoredRecord::new("Patient", "123", r#"{"resourceType":"Patient","id":"123","active":true}"#);
///     assert!(store.replace(updated).await?);
///
///     // Delete
///     assert!(store.delete("Patient", "123").await?);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Reads the record stored under `resource_type`/`id`.
    ///
    /// Returns `Ok(None)` when no such record exists.
    async fn get(&self, resource_type: &str, id: &str) -> StorageResult<Option<StoredRecord>>;

    /// Overwrites the record stored under `record`'s key.
    ///
    /// Returns `false` and writes nothing if no such record exists.
    async fn replace(&self, record: StoredRecord) -> StorageResult<bool>;

    /// Stores `record` only if its key is not yet taken.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(AlreadyExists)` - if a record with the same
    ///   resource type and id exists
    async fn insert(&self, record: StoredRecord) -> StorageResult<()>;

    /// Removes the record stored under `resource_type`/`id`.
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    async fn delete(&self, resource_type: &str, id: &str) -> StorageResult<bool>;

    /// Counts the records of the given resource type.
    async fn count(&self, resource_type: &str) -> StorageResult<u64>;

    /// Checks that the backend can serve requests.
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}
