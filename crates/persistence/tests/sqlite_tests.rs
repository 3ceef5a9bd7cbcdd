//! SQLite backend integration tests.

#![cfg(feature = "sqlite")]

mod common;

use std::sync::Arc;

use carebase_persistence::backends::sqlite::{SqliteStore, SqliteStoreConfig};
use carebase_persistence::core::RecordStore;

use common::*;

fn create_backend() -> SqliteStore {
    let backend = SqliteStore::in_memory().expect("Failed to create SQLite store");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

fn create_file_backend(path: &std::path::Path) -> SqliteStore {
    let backend = SqliteStore::open(path).expect("Failed to open SQLite store");
    backend.init_schema().expect("Failed to initialize schema");
    backend
}

// ============================================================================
// CRUD Contract
// ============================================================================

#[tokio::test]
async fn test_insert_and_get() {
    check_insert_and_get(&create_backend()).await;
}

#[tokio::test]
async fn test_get_missing() {
    check_get_missing(&create_backend()).await;
}

#[tokio::test]
async fn test_insert_duplicate() {
    check_insert_duplicate(&create_backend()).await;
}

#[tokio::test]
async fn test_replace() {
    check_replace(&create_backend()).await;
}

#[tokio::test]
async fn test_delete() {
    check_delete(&create_backend()).await;
}

#[tokio::test]
async fn test_resource_type_isolation() {
    check_resource_type_isolation(&create_backend()).await;
}

#[tokio::test]
async fn test_health() {
    check_health(&create_backend()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_insert_file_backed() {
    let dir = tempfile::tempdir().unwrap();
    let backend = create_file_backend(&dir.path().join("race.db"));
    check_concurrent_insert(Arc::new(backend)).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_replace_racing_delete_file_backed() {
    let dir = tempfile::tempdir().unwrap();
    let backend = create_file_backend(&dir.path().join("replace.db"));
    check_replace_after_delete(Arc::new(backend)).await;
}

// ============================================================================
// File Persistence
// ============================================================================

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carebase.db");

    {
        let backend = create_file_backend(&path);
        backend.insert(patient_record("p1", "Smith")).await.unwrap();
    }

    let backend = create_file_backend(&path);
    let read = backend.get("Patient", "p1").await.unwrap();
    assert_eq!(read, Some(patient_record("p1", "Smith")));
}

#[tokio::test]
async fn test_custom_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = SqliteStoreConfig {
        max_connections: 2,
        enable_wal: false,
        ..Default::default()
    };
    let backend = SqliteStore::with_config(dir.path().join("custom.db"), config).unwrap();
    backend.init_schema().unwrap();

    assert_eq!(backend.config().max_connections, 2);
    assert_eq!(backend.backend_name(), "sqlite");
    check_insert_and_get(&backend).await;
}

#[tokio::test]
async fn test_payload_is_stored_verbatim() {
    let backend = create_backend();
    // Not JSON: the store never inspects payloads.
    let record = carebase_persistence::StoredRecord::new("Patient", "raw", "not json at all");
    backend.insert(record.clone()).await.unwrap();

    let read = backend.get("Patient", "raw").await.unwrap().unwrap();
    assert_eq!(read, record);
}
