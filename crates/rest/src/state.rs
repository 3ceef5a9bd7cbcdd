//! Application state for the Carebase REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the record store and the server configuration.

use std::sync::Arc;

use carebase_persistence::core::RecordStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`RecordStore`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use carebase_persistence::backends::memory::InMemoryStore;
/// use carebase_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(InMemoryStore::new()), ServerConfig::default());
/// assert_eq!(state.base_url(), "http://localhost:8080/fhir");
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: RecordStore> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Returns the absolute URL of a resource instance.
    pub fn resource_url(&self, resource_type: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url(), resource_type, id)
    }
}
