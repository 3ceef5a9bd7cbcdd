//! Error types for decoding FHIR resources.

use thiserror::Error;

/// Why a request body could not be decoded into a resource.
///
/// The `Display` output is the human-readable diagnostic returned to
/// clients in the `details` field of a 400 response.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The bytes are not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The JSON document is not an object.
    #[error("resource must be a JSON object")]
    NotAnObject,

    /// The `resourceType` element is absent or not a string.
    #[error("resource must contain a string resourceType")]
    MissingResourceType,

    /// The document describes a different resource type.
    #[error("expected resourceType '{expected}', found '{found}'")]
    WrongResourceType {
        /// The type this decoder handles.
        expected: &'static str,
        /// The type named in the document.
        found: String,
    },

    /// An element is unknown, has the wrong JSON type, or carries a code
    /// outside its value set.
    #[error("{0}")]
    Structure(#[source] serde_json::Error),

    /// A primitive value violates its FHIR lexical rule.
    #[error("invalid value at {path}: {message}")]
    InvalidValue {
        /// Dotted element path, e.g. `Patient.birthDate`.
        path: String,
        /// What is wrong with the value.
        message: String,
    },
}

impl DecodeError {
    /// Creates an [`DecodeError::InvalidValue`] for the element at `path`.
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        DecodeError::InvalidValue {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
