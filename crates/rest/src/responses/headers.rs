//! Response header generation.
//!
//! Provides utilities for building FHIR-standard response headers.

use axum::http::{HeaderMap, HeaderValue, header};
use tracing::warn;

/// Media type of FHIR JSON.
pub const FHIR_JSON: &str = "application/fhir+json";

/// Builder for resource response headers.
///
/// Generates:
/// - Content-Type
/// - Location (for create operations)
#[derive(Debug)]
pub struct ResourceHeaders {
    /// Location URL (for created resources).
    location: Option<String>,
    /// Content-Type.
    content_type: &'static str,
}

impl Default for ResourceHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceHeaders {
    /// Creates headers for a FHIR JSON body.
    pub fn new() -> Self {
        Self {
            location: None,
            content_type: FHIR_JSON,
        }
    }

    /// Sets the Location URL.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Converts to an HTTP HeaderMap.
    ///
    /// A location that is not a valid header value is left out.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type),
        );

        if let Some(location) = &self.location {
            match HeaderValue::from_str(location) {
                Ok(value) => {
                    headers.insert(header::LOCATION, value);
                }
                Err(_) => warn!(location = %location, "Dropping invalid Location header"),
            }
        }

        headers
    }
}
