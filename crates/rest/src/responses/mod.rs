//! Response formatting for the Carebase REST API.
//!
//! - [`operation_outcome`] - OperationOutcome generation
//! - [`headers`] - Response header generation (Content-Type, Location)

pub mod headers;
pub mod operation_outcome;

pub use headers::{FHIR_JSON, ResourceHeaders};
pub use operation_outcome::{IssueType, OperationOutcomeBuilder, error_outcome};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Builds a response whose body is already-encoded FHIR JSON.
pub fn fhir_json_response(status: StatusCode, headers: ResourceHeaders, body: String) -> Response {
    (status, headers.to_header_map(), body).into_response()
}
