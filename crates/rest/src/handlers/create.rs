//! Create interaction handler.
//!
//! Implements the FHIR [create interaction](https://hl7.org/fhir/http.html#create):
//! `POST [base]/[type]`

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Response,
};
use carebase_fhir::{FhirResource, decode, encode};
use carebase_persistence::core::RecordStore;
use carebase_persistence::types::StoredRecord;
use tracing::debug;
use uuid::Uuid;

use crate::error::RestResult;
use crate::responses::{ResourceHeaders, fhir_json_response};
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Creates a new resource. A client-supplied id is kept; otherwise the
/// server assigns a UUID v4.
///
/// # HTTP Request
///
/// `POST [base]/[type]`
///
/// # Response
///
/// - `201 Created` - Resource created, returns the stored resource and a
///   `Location` header
/// - `400 Bad Request` - Body is not a valid resource
/// - `409 Conflict` - A resource with the supplied id already exists
///
/// # Example
///
/// ```http
/// POST /fhir/Patient HTTP/1.1
/// Host: fhir.example.com
/// Content-Type: application/fhir+json
///
/// {"resourceType": "Patient", "name": [{"family": "Smith"}]}
/// ```
pub async fn create_handler<R, S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> RestResult<Response>
where
    R: FhirResource,
    S: RecordStore,
{
    let resource_type = R::RESOURCE_TYPE;
    debug!(resource_type, bytes = body.len(), "Processing create request");

    let mut resource: R = decode(&body)?;

    let id = match resource.id() {
        Some(id) => id.to_string(),
        None => {
            let id = Uuid::new_v4().to_string();
            resource.set_id(id.clone());
            id
        }
    };

    let payload = encode(&resource);
    state
        .storage()
        .insert(StoredRecord::new(resource_type, &id, payload.clone()))
        .await?;

    debug!(resource_type, id = %id, "Resource created");

    let headers = ResourceHeaders::new().with_location(state.resource_url(resource_type, &id));
    Ok(fhir_json_response(StatusCode::CREATED, headers, payload))
}
