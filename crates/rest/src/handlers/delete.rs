//! Delete interaction handler.
//!
//! Implements the FHIR [delete interaction](https://hl7.org/fhir/http.html#delete):
//! `DELETE [base]/[type]/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carebase_fhir::FhirResource;
use carebase_persistence::core::RecordStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// Removes a resource permanently; nothing of it is kept.
///
/// # HTTP Request
///
/// `DELETE [base]/[type]/[id]`
///
/// # Response
///
/// - `204 No Content` - Resource deleted
/// - `404 Not Found` - Resource does not exist
///
/// # Example
///
/// ```http
/// DELETE /fhir/Patient/123 HTTP/1.1
/// Host: fhir.example.com
/// ```
pub async fn delete_handler<R, S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    R: FhirResource,
    S: RecordStore,
{
    let resource_type = R::RESOURCE_TYPE;
    debug!(resource_type, id = %id, "Processing delete request");

    if !state.storage().delete(resource_type, &id).await? {
        debug!(resource_type, id = %id, "Resource not found");
        return Err(RestError::NotFound {
            resource_type: resource_type.to_string(),
            id,
        });
    }

    debug!(resource_type, id = %id, "Resource deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
