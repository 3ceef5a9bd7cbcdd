//! REST API test harness.
//!
//! Builds [`TestServer`]s over the routes of `carebase-rest`, keeping a
//! handle on the store so tests can seed and inspect records directly.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use carebase_persistence::backends::memory::InMemoryStore;
use carebase_persistence::core::RecordStore;
use carebase_persistence::error::{BackendError, StorageError, StorageResult};
use carebase_persistence::types::StoredRecord;
use serde_json::{Value, json};

use carebase_rest::{AppState, ServerConfig, create_app_with_config, routing};

/// Base URL the test configuration advertises in `Location` headers.
pub const TEST_BASE_URL: &str = "http://localhost:8080/fhir";

/// Creates a test server over the bare routes, sharing the store.
pub fn create_test_server_with<S>(store: Arc<S>) -> TestServer
where
    S: RecordStore + 'static,
{
    let config = ServerConfig {
        base_url: TEST_BASE_URL.to_string(),
        ..ServerConfig::for_testing()
    };
    let state = AppState::new(store, config);
    let app = routing::create_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server over an in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let server = create_test_server_with(Arc::clone(&store));
    (server, store)
}

/// Creates a test server over the full middleware stack.
pub fn create_app_server(config: ServerConfig) -> TestServer {
    let app = create_app_with_config(InMemoryStore::new(), config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server over an initialized in-memory SQLite store.
#[cfg(feature = "sqlite")]
pub fn create_sqlite_test_server()
-> (TestServer, Arc<carebase_persistence::backends::sqlite::SqliteStore>) {
    let store = carebase_persistence::backends::sqlite::SqliteStore::in_memory()
        .expect("Failed to create SQLite store");
    store.init_schema().expect("Failed to init schema");
    let store = Arc::new(store);
    let server = create_test_server_with(Arc::clone(&store));
    (server, store)
}

/// Builds a patient resource with one family name.
pub fn patient_json(id: &str, family: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "id": id,
        "name": [{"family": family}],
        "active": true
    })
}

/// Stores a patient directly, bypassing the HTTP layer.
pub async fn seed_patient<S: RecordStore>(store: &S, id: &str, family: &str) {
    store
        .insert(StoredRecord::new(
            "Patient",
            id,
            patient_json(id, family).to_string(),
        ))
        .await
        .expect("Failed to seed patient");
}

/// Reads the stored payload of a patient as JSON.
pub async fn stored_patient<S: RecordStore>(store: &S, id: &str) -> Option<Value> {
    store
        .get("Patient", id)
        .await
        .expect("Failed to read patient")
        .map(|record| serde_json::from_str(record.payload()).expect("Stored payload is JSON"))
}

/// A store whose every operation fails as if the database were gone.
pub struct UnavailableStore;

fn unavailable() -> StorageError {
    StorageError::Backend(BackendError::Unavailable {
        backend_name: "unavailable".to_string(),
        message: "database is down".to_string(),
    })
}

#[async_trait]
impl RecordStore for UnavailableStore {
    fn backend_name(&self) -> &'static str {
        "unavailable"
    }

    async fn get(&self, _resource_type: &str, _id: &str) -> StorageResult<Option<StoredRecord>> {
        Err(unavailable())
    }

    async fn replace(&self, _record: StoredRecord) -> StorageResult<bool> {
        Err(unavailable())
    }

    async fn insert(&self, _record: StoredRecord) -> StorageResult<()> {
        Err(unavailable())
    }

    async fn delete(&self, _resource_type: &str, _id: &str) -> StorageResult<bool> {
        Err(unavailable())
    }

    async fn count(&self, _resource_type: &str) -> StorageResult<u64> {
        Err(unavailable())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Err(unavailable())
    }
}
