//! FHIR route configuration.
//!
//! Defines all routes for the Carebase REST API.

use axum::{
    Router,
    routing::{get, post},
};
use carebase_fhir::{FhirResource, Patient};
use carebase_persistence::core::RecordStore;

use crate::handlers;
use crate::state::AppState;

/// Path prefix under which resource routes are mounted.
pub const FHIR_BASE_PATH: &str = "/fhir";

/// Creates all REST API routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (storage check)
///
/// ## Resources (under `/fhir`)
/// - `POST /fhir/Patient` - Create
/// - `GET /fhir/Patient/{id}` - Read
/// - `PUT /fhir/Patient/{id}` - Update
/// - `DELETE /fhir/Patient/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecordStore + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .nest(FHIR_BASE_PATH, resource_routes::<Patient, S>())
        .with_state(state)
}

/// Creates the type-level and instance-level routes for resource type `R`.
///
/// Routes are relative: `/{R::RESOURCE_TYPE}` and `/{R::RESOURCE_TYPE}/{id}`.
pub fn resource_routes<R, S>() -> Router<AppState<S>>
where
    R: FhirResource,
    S: RecordStore + 'static,
{
    let type_path = format!("/{}", R::RESOURCE_TYPE);
    let instance_path = format!("/{}/{{id}}", R::RESOURCE_TYPE);

    Router::new()
        .route(&type_path, post(handlers::create_handler::<R, S>))
        .route(
            &instance_path,
            get(handlers::read_handler::<R, S>)
                .put(handlers::update_handler::<R, S>)
                .delete(handlers::delete_handler::<R, S>),
        )
}
