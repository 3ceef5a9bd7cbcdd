//! Stored record type.
//!
//! This module defines [`StoredRecord`], one row of the key-value table:
//! the key `(resource_type, id)` and the resource's canonical JSON.

use serde::{Deserialize, Serialize};

/// A resource payload with its storage key.
///
/// # Examples
///
/// ```
/// use carebase_persistence::types::StoredRecord;
///
/// let record = StoredRecord::new(
///     "Patient",
///     "123",
///     r#"{"resourceType":"Patient","id":"123"}"#,
/// );
///
/// assert_eq!(record.resource_type(), "Patient");
/// assert_eq!(record.id(), "123");
/// assert_eq!(record.url(), "Patient/123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// The FHIR resource type (e.g., "Patient").
    resource_type: String,

    /// The resource's logical ID.
    id: String,

    /// The canonical wire-format JSON.
    payload: String,
}

impl StoredRecord {
    /// Creates a record from its key and payload.
    pub fn new(
        resource_type: impl Into<String>,
        id: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            payload: payload.into(),
        }
    }

    /// Returns the resource type.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the logical ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stored payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consumes the record and returns its payload.
    pub fn into_payload(self) -> String {
        self.payload
    }

    /// Returns the relative URL `{resource_type}/{id}`.
    pub fn url(&self) -> String {
        format!("{}/{}", self.resource_type, self.id)
    }
}
