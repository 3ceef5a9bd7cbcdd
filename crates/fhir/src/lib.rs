//! # carebase-fhir - FHIR Patient Model and Wire Codec
//!
//! This crate holds the one piece of domain knowledge the Carebase server
//! needs: how a FHIR R4 `Patient` looks on the wire and how to tell a
//! structurally valid one from everything else.
//!
//! ## Decoding
//!
//! [`decode`] parses raw request bytes into a typed resource. It rejects
//! malformed JSON, documents whose `resourceType` names another type,
//! unknown elements, wrongly typed values, codes outside their value set and
//! primitives that break their FHIR lexical rules.
//!
//! ## Encoding
//!
//! [`encode`] produces the canonical wire JSON: `resourceType` first, absent
//! and empty elements omitted. Anything [`decode`] accepted round-trips.
//!
//! ## Example
//!
//! ```
//! use carebase_fhir::{Patient, decode, encode};
//!
//! let raw = br#"{"resourceType":"Patient","name":[{"family":"Doe"}]}"#;
//! let patient: Patient = decode(raw).unwrap();
//! assert_eq!(patient.name[0].family.as_deref(), Some("Doe"));
//!
//! let json = encode(&patient);
//! assert!(json.starts_with(r#"{"resourceType":"Patient""#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod datatypes;
pub mod error;
pub mod patient;
pub mod primitives;

pub use codec::{FhirResource, decode, decode_str, decode_value, encode, encode_value};
pub use error::{DecodeError, DecodeResult};
pub use patient::Patient;
