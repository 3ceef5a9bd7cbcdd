//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and
//! load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carebase_fhir::{FhirResource, Patient};
use carebase_persistence::core::RecordStore;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server is up; reports the backend name, the number of stored
///   patients and the current time
/// - `503 Service Unavailable` - The patient count could not be read
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: RecordStore,
{
    debug!("Processing health check request");

    let patients = state.storage().count(Patient::RESOURCE_TYPE).await?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "patients": patients,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Runs the store's health check.
///
/// # HTTP Request
///
/// `GET /_readiness`
///
/// # Response
///
/// - `200 OK` - Storage is reachable
/// - `503 Service Unavailable` - Storage check failed
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: RecordStore,
{
    debug!("Processing readiness check request");

    let backend_name = state.storage().backend_name();

    if let Err(e) = state.storage().health_check().await {
        warn!(backend = backend_name, error = %e, "Readiness check failed");
        return Err(RestError::Unavailable {
            message: format!("Storage backend {} is not ready: {}", backend_name, e),
        });
    }

    let response = serde_json::json!({
        "status": "ready",
        "backend": backend_name,
        "checks": {
            "storage": "ok"
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
