//! Record fixtures for persistence tests.

use serde_json::json;

use carebase_persistence::types::StoredRecord;

/// Builds the canonical JSON of a patient with one family name.
pub fn patient_json(id: &str, family: &str) -> String {
    json!({
        "resourceType": "Patient",
        "id": id,
        "name": [{"family": family}]
    })
    .to_string()
}

/// Builds a Patient record keyed by `id`.
pub fn patient_record(id: &str, family: &str) -> StoredRecord {
    StoredRecord::new("Patient", id, patient_json(id, family))
}
