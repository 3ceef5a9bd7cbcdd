//! Read interaction handler.
//!
//! Implements the FHIR [read interaction](https://hl7.org/fhir/http.html#read):
//! `GET [base]/[type]/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use carebase_fhir::{FhirResource, decode_str, encode};
use carebase_persistence::core::RecordStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::responses::{ResourceHeaders, fhir_json_response};
use crate::state::AppState;

/// Handler for the read interaction.
///
/// Reads a resource by ID and returns it in canonical FHIR JSON.
///
/// # HTTP Request
///
/// `GET [base]/[type]/[id]`
///
/// # Response
///
/// - `200 OK` - Resource found, returns the resource
/// - `404 Not Found` - Resource does not exist
/// - `500 Internal Server Error` - The stored payload no longer decodes
///
/// # Example
///
/// ```http
/// GET /fhir/Patient/123 HTTP/1.1
/// Host: fhir.example.com
/// Accept: application/fhir+json
/// ```
pub async fn read_handler<R, S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    R: FhirResource,
    S: RecordStore,
{
    let resource_type = R::RESOURCE_TYPE;
    debug!(resource_type, id = %id, "Processing read request");

    let Some(stored) = state.storage().get(resource_type, &id).await? else {
        debug!(resource_type, id = %id, "Resource not found");
        return Err(RestError::NotFound {
            resource_type: resource_type.to_string(),
            id,
        });
    };

    let resource: R = decode_str(stored.payload()).map_err(|e| RestError::Internal {
        message: format!("Stored {} is not a valid resource: {}", stored.url(), e),
    })?;

    Ok(fhir_json_response(
        StatusCode::OK,
        ResourceHeaders::new(),
        encode(&resource),
    ))
}
