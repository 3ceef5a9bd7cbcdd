//! Update interaction handler.
//!
//! Implements the FHIR [update interaction](https://hl7.org/fhir/http.html#update):
//! `PUT [base]/[type]/[id]`

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carebase_fhir::{FhirResource, decode, encode};
use carebase_persistence::core::RecordStore;
use carebase_persistence::types::StoredRecord;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Replaces an existing resource. Update never creates: the id must already
/// exist, and the body must carry the same id as the path.
///
/// # HTTP Request
///
/// `PUT [base]/[type]/[id]`
///
/// # Response
///
/// - `204 No Content` - Resource replaced
/// - `400 Bad Request` - Body is not a valid resource, or its id is absent
///   or differs from the path id
/// - `404 Not Found` - Resource does not exist
///
/// # Example
///
/// ```http
/// PUT /fhir/Patient/123 HTTP/1.1
/// Host: fhir.example.com
/// Content-Type: application/fhir+json
///
/// {"resourceType": "Patient", "id": "123", "active": true}
/// ```
pub async fn update_handler<R, S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<Response>
where
    R: FhirResource,
    S: RecordStore,
{
    let resource_type = R::RESOURCE_TYPE;
    debug!(resource_type, id = %id, "Processing update request");

    let resource: R = decode(&body)?;

    if resource.id() != Some(id.as_str()) {
        debug!(
            resource_type,
            path_id = %id,
            body_id = ?resource.id(),
            "Body id does not match path id"
        );
        return Err(RestError::IdentityMismatch {
            resource_type: resource_type.to_string(),
        });
    }

    let record = StoredRecord::new(resource_type, &id, encode(&resource));
    if !state.storage().replace(record).await? {
        debug!(resource_type, id = %id, "Resource not found");
        return Err(RestError::NotFound {
            resource_type: resource_type.to_string(),
            id,
        });
    }

    debug!(resource_type, id = %id, "Resource updated");

    Ok(StatusCode::NO_CONTENT.into_response())
}
