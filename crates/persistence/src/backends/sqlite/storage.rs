//! RecordStore implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{ErrorCode, OptionalExtension, params};

use crate::core::RecordStore;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::StoredRecord;

use super::SqliteStore;

fn internal_error(message: String, source: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: Some(Box::new(source)),
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

#[async_trait]
impl RecordStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get(&self, resource_type: &str, id: &str) -> StorageResult<Option<StoredRecord>> {
        let conn = self.get_connection()?;

        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM records WHERE resource_type = ?1 AND id = ?2",
                params![resource_type, id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read record: {}", e), e))?;

        Ok(payload.map(|payload| StoredRecord::new(resource_type, id, payload)))
    }

    async fn replace(&self, record: StoredRecord) -> StorageResult<bool> {
        let conn = self.get_connection()?;

        let updated = conn
            .execute(
                "UPDATE records SET payload = ?3 WHERE resource_type = ?1 AND id = ?2",
                params![record.resource_type(), record.id(), record.payload()],
            )
            .map_err(|e| internal_error(format!("Failed to replace record: {}", e), e))?;

        Ok(updated > 0)
    }

    async fn insert(&self, record: StoredRecord) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let result = conn.execute(
            "INSERT INTO records (resource_type, id, payload) VALUES (?1, ?2, ?3)",
            params![record.resource_type(), record.id(), record.payload()],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_constraint_violation(&e) => {
                Err(StorageError::Resource(ResourceError::AlreadyExists {
                    resource_type: record.resource_type().to_string(),
                    id: record.id().to_string(),
                }))
            }
            Err(e) => Err(internal_error(format!("Failed to insert record: {}", e), e)),
        }
    }

    async fn delete(&self, resource_type: &str, id: &str) -> StorageResult<bool> {
        let conn = self.get_connection()?;

        let removed = conn
            .execute(
                "DELETE FROM records WHERE resource_type = ?1 AND id = ?2",
                params![resource_type, id],
            )
            .map_err(|e| internal_error(format!("Failed to delete record: {}", e), e))?;

        Ok(removed > 0)
    }

    async fn count(&self, resource_type: &str) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM records WHERE resource_type = ?1",
                params![resource_type],
                |row| row.get(0),
            )
            .map_err(|e| internal_error(format!("Failed to count records: {}", e), e))?;

        Ok(count as u64)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection().map_err(|e| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })?;

        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| internal_error(format!("Health check failed: {}", e), e))
    }
}
