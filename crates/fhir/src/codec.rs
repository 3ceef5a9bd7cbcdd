//! JSON wire codec for FHIR resources.
//!
//! The codec is generic over [`FhirResource`], so a new resource type only
//! needs a serde model and a `validate` implementation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::primitives::check_id;

/// Capabilities the codec and the REST layer need from a resource type.
pub trait FhirResource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The FHIR `resourceType` name, e.g. `"Patient"`.
    const RESOURCE_TYPE: &'static str;

    /// Returns the logical id, if one is set.
    fn id(&self) -> Option<&str>;

    /// Assigns the logical id.
    fn set_id(&mut self, id: String);

    /// Checks the rules serde cannot express: primitive formats, choice
    /// element exclusivity and invariants between elements.
    fn validate(&self) -> DecodeResult<()>;
}

/// Decodes raw bytes as the FHIR JSON representation of `R`.
///
/// # Errors
///
/// See [`DecodeError`] for the failure categories.
///
/// # Example
///
/// ```
/// use carebase_fhir::{DecodeError, Patient, decode};
///
/// let err = decode::<Patient>(b"{not json").unwrap_err();
/// assert!(matches!(err, DecodeError::Syntax(_)));
/// ```
pub fn decode<R: FhirResource>(raw: &[u8]) -> DecodeResult<R> {
    let value: Value = serde_json::from_slice(raw).map_err(DecodeError::Syntax)?;
    decode_value(value)
}

/// Decodes a JSON string as `R`.
pub fn decode_str<R: FhirResource>(raw: &str) -> DecodeResult<R> {
    decode(raw.as_bytes())
}

/// Decodes an already-parsed JSON value as `R`.
pub fn decode_value<R: FhirResource>(value: Value) -> DecodeResult<R> {
    let Value::Object(mut object) = value else {
        return Err(DecodeError::NotAnObject);
    };

    let resource_type = match object.remove("resourceType") {
        Some(Value::String(resource_type)) => resource_type,
        _ => return Err(DecodeError::MissingResourceType),
    };
    if resource_type != R::RESOURCE_TYPE {
        return Err(DecodeError::WrongResourceType {
            expected: R::RESOURCE_TYPE,
            found: resource_type,
        });
    }

    let resource: R =
        serde_json::from_value(Value::Object(object)).map_err(DecodeError::Structure)?;
    resource.validate()?;
    Ok(resource)
}

/// Serializes `resource` to its canonical FHIR JSON string.
///
/// `resourceType` is written first; absent and empty elements are omitted.
pub fn encode<R: FhirResource>(resource: &R) -> String {
    match serde_json::to_string(&Tagged::new(resource)) {
        Ok(json) => json,
        // Derived impls over string-keyed structs never fail to serialize.
        Err(e) => unreachable!("failed to serialize {}: {}", R::RESOURCE_TYPE, e),
    }
}

/// Serializes `resource` to a JSON value including `resourceType`.
pub fn encode_value<R: FhirResource>(resource: &R) -> Value {
    match serde_json::to_value(Tagged::new(resource)) {
        Ok(value) => value,
        Err(e) => unreachable!("failed to serialize {}: {}", R::RESOURCE_TYPE, e),
    }
}

/// Checks one entry of a resource's `contained` list.
///
/// Contained resources are kept as raw JSON. Each must name its type, and
/// may not itself contain resources (dom-2).
pub(crate) fn validate_contained(path: &str, value: &Value) -> DecodeResult<()> {
    let Value::Object(object) = value else {
        return Err(DecodeError::invalid(path, "contained resource must be an object"));
    };
    match object.get("resourceType") {
        Some(Value::String(resource_type)) if !resource_type.is_empty() => {}
        _ => {
            return Err(DecodeError::invalid(
                path,
                "contained resource must have a resourceType",
            ));
        }
    }
    if object.contains_key("contained") {
        return Err(DecodeError::invalid(
            path,
            "contained resource must not contain other resources",
        ));
    }
    match object.get("id") {
        None => Ok(()),
        Some(Value::String(id)) => check_id(&format!("{path}.id"), id),
        Some(_) => Err(DecodeError::invalid(format!("{path}.id"), "id must be a string")),
    }
}

/// Wraps a resource so `resourceType` precedes its elements.
#[derive(Serialize)]
struct Tagged<'a, R> {
    #[serde(rename = "resourceType")]
    resource_type: &'static str,
    #[serde(flatten)]
    resource: &'a R,
}

impl<'a, R: FhirResource> Tagged<'a, R> {
    fn new(resource: &'a R) -> Self {
        Self {
            resource_type: R::RESOURCE_TYPE,
            resource,
        }
    }
}
