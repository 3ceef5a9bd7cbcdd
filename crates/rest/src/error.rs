//! Error types for the Carebase REST API.
//!
//! This module defines the error type returned by every handler and its
//! conversion into an HTTP response.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | NotFound | 404 | OperationOutcome `not-found` |
//! | Decode | 400 | `{"error": "Failed to parse resource", "details": ...}` |
//! | IdentityMismatch | 400 | plain text `Mismatched <type> ID` |
//! | Conflict | 409 | OperationOutcome `duplicate` |
//! | Internal | 500 | OperationOutcome `exception` |
//! | Unavailable | 503 | OperationOutcome `transient` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carebase_fhir::DecodeError;
use carebase_persistence::error::{BackendError, ResourceError, StorageError};
use std::fmt;
use tracing::error;

use crate::responses::{IssueType, ResourceHeaders, error_outcome};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// The resource type (e.g., "Patient").
        resource_type: String,
        /// The resource ID.
        id: String,
    },

    /// Request body is not a valid resource (HTTP 400).
    Decode(DecodeError),

    /// Body id does not match the path id on update (HTTP 400).
    IdentityMismatch {
        /// The resource type.
        resource_type: String,
    },

    /// A resource with the requested id already exists (HTTP 409).
    Conflict {
        /// The resource type.
        resource_type: String,
        /// The resource ID.
        id: String,
    },

    /// Internal server error (HTTP 500).
    Internal {
        /// Error message.
        message: String,
    },

    /// Storage is not reachable (HTTP 503).
    Unavailable {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource_type, id } => {
                write!(f, "Resource not found: {}/{}", resource_type, id)
            }
            RestError::Decode(e) => write!(f, "Failed to parse resource: {}", e),
            RestError::IdentityMismatch { resource_type } => {
                write!(f, "Mismatched {} ID", resource_type)
            }
            RestError::Conflict { resource_type, id } => {
                write!(f, "Resource already exists: {}/{}", resource_type, id)
            }
            RestError::Internal { message } => write!(f, "Internal error: {}", message),
            RestError::Unavailable { message } => write!(f, "Service unavailable: {}", message),
        }
    }
}

impl std::error::Error for RestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RestError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code, details) = match self {
            RestError::Decode(e) => {
                let body = serde_json::json!({
                    "error": "Failed to parse resource",
                    "details": e.to_string()
                });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            RestError::IdentityMismatch { resource_type } => {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Mismatched {} ID", resource_type),
                )
                    .into_response();
            }
            RestError::NotFound { resource_type, .. } => (
                StatusCode::NOT_FOUND,
                IssueType::NotFound,
                format!("{} not found", resource_type),
            ),
            RestError::Conflict { resource_type, id } => (
                StatusCode::CONFLICT,
                IssueType::Duplicate,
                format!("{}/{} already exists", resource_type, id),
            ),
            RestError::Internal { message } => {
                error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    IssueType::Exception,
                    message,
                )
            }
            RestError::Unavailable { message } => {
                error!(error = %message, "Storage unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    IssueType::Transient,
                    message,
                )
            }
        };

        let outcome = error_outcome(code, &details);
        (
            status,
            ResourceHeaders::new().to_header_map(),
            outcome.to_string(),
        )
            .into_response()
    }
}

impl From<DecodeError> for RestError {
    fn from(err: DecodeError) -> Self {
        RestError::Decode(err)
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::AlreadyExists { resource_type, id } => {
                RestError::Conflict { resource_type, id }
            }
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::Unavailable {
                    message: err.to_string(),
                }
            }
            BackendError::Internal { .. } => RestError::Internal {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            resource_type: "Patient".to_string(),
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found: Patient/123");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = RestError::NotFound {
            resource_type: "Patient".to_string(),
            id: "abc".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/fhir+json"
        );

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["resourceType"], "OperationOutcome");
        assert_eq!(body["issue"][0]["code"], "not-found");
        assert_eq!(body["issue"][0]["details"]["text"], "Patient not found");
    }

    #[tokio::test]
    async fn test_decode_response() {
        let err: RestError = carebase_fhir::decode::<carebase_fhir::Patient>(b"{")
            .unwrap_err()
            .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Failed to parse resource");
        assert!(body["details"].as_str().unwrap().starts_with("invalid JSON"));
    }

    #[tokio::test]
    async fn test_identity_mismatch_response() {
        let response = RestError::IdentityMismatch {
            resource_type: "Patient".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Mismatched Patient ID");
    }

    #[test]
    fn test_storage_error_mapping() {
        let err: RestError = StorageError::Resource(ResourceError::AlreadyExists {
            resource_type: "Patient".to_string(),
            id: "abc".to_string(),
        })
        .into();
        assert!(matches!(err, RestError::Conflict { .. }));

        let err: RestError = StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "pool timed out".to_string(),
        })
        .into();
        assert!(matches!(err, RestError::Unavailable { .. }));

        let err: RestError = StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: "disk I/O error".to_string(),
            source: None,
        })
        .into();
        assert!(matches!(err, RestError::Internal { .. }));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                RestError::Conflict {
                    resource_type: "Patient".to_string(),
                    id: "abc".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                RestError::Internal {
                    message: "boom".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RestError::Unavailable {
                    message: "down".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
