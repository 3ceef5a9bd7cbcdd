//! Route configuration for the Carebase REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod fhir_routes;

pub use fhir_routes::{FHIR_BASE_PATH, create_routes, resource_routes};
