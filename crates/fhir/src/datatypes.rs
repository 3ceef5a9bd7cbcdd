//! FHIR R4 general-purpose data types used by [`Patient`](crate::Patient).
//!
//! Every struct rejects unknown elements and omits absent ones when
//! serialized. Primitive elements carry their `_name` sibling as an
//! [`Element`]. Coded elements are enums, so a code outside its value set
//! fails deserialization with serde's "unknown variant" message.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::primitives::{
    check_date_time, check_id, check_instant, check_positive_int, check_string, check_uri,
};

// ============================================================================
// Value sets
// ============================================================================

/// Administrative gender (`http://hl7.org/fhir/ValueSet/administrative-gender`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdministrativeGender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
    /// Unknown.
    Unknown,
}

/// How a [`HumanName`] is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameUse {
    /// Known as, conventional or the one you normally use.
    Usual,
    /// The formal name as registered in an official registry.
    Official,
    /// A temporary name.
    Temp,
    /// A name used informally.
    Nickname,
    /// Anonymous assigned name.
    Anonymous,
    /// No longer in use.
    Old,
    /// Name used prior to changing name because of marriage.
    Maiden,
}

/// Telecommunications form of a [`ContactPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointSystem {
    /// Phone.
    Phone,
    /// Fax.
    Fax,
    /// Email.
    Email,
    /// Pager.
    Pager,
    /// URL.
    Url,
    /// SMS.
    Sms,
    /// Other.
    Other,
}

/// Purpose of a [`ContactPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointUse {
    /// Home.
    Home,
    /// Work.
    Work,
    /// Temporary.
    Temp,
    /// No longer in use.
    Old,
    /// Mobile device.
    Mobile,
}

/// Purpose of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressUse {
    /// Home.
    Home,
    /// Work.
    Work,
    /// Temporary.
    Temp,
    /// No longer in use.
    Old,
    /// Billing.
    Billing,
}

/// Whether an [`Address`] is postal, physical, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Postal.
    Postal,
    /// Physical.
    Physical,
    /// Postal and physical.
    Both,
}

/// Purpose of an [`Identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierUse {
    /// Usual.
    Usual,
    /// Official.
    Official,
    /// Temporary.
    Temp,
    /// Secondary.
    Secondary,
    /// No longer in use.
    Old,
}

/// Status of a [`Narrative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeStatus {
    /// Generated from the structured data.
    Generated,
    /// Generated, plus extension content.
    Extensions,
    /// Contains additional information not in the structured data.
    Additional,
    /// No human-readable content.
    Empty,
}


// ============================================================================
// Element plumbing
// ============================================================================

/// The `id` and extensions of a primitive value.
///
/// FHIR JSON carries them in a sibling property named after the primitive
/// with a leading underscore: `"birthDate"` is paired with `"_birthDate"`.
/// Repeating primitives pair arrays of equal length, using `null` where one
/// side has nothing for that position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Element {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl Element {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        if self.id.is_none() && self.extension.is_empty() {
            return Err(DecodeError::invalid(
                path,
                "primitive extension element must have an id or extensions",
            ));
        }
        validate_base(path, &self.id, &self.extension)
    }
}

/// Checks the `id` and `extension` every element may carry.
pub(crate) fn validate_base(
    path: &str,
    id: &Option<String>,
    extension: &[Extension],
) -> DecodeResult<()> {
    if let Some(id) = id {
        check_string(&format!("{path}.id"), id)?;
    }
    validate_all(extension, &format!("{path}.extension"), Extension::validate)
}

/// Checks the `modifierExtension` list of a resource or backbone element.
pub(crate) fn validate_modifiers(path: &str, modifiers: &[Extension]) -> DecodeResult<()> {
    validate_all(
        modifiers,
        &format!("{path}.modifierExtension"),
        Extension::validate,
    )
}

/// Checks a single primitive and its `_name` sibling.
pub(crate) fn check_primitive<T: ?Sized>(
    path: &str,
    value: Option<&T>,
    element: &Option<Element>,
    check: impl Fn(&str, &T) -> DecodeResult<()>,
) -> DecodeResult<()> {
    if let Some(value) = value {
        check(path, value)?;
    }
    check_element(path, element)
}

/// Checks the `_name` sibling of a primitive that has no lexical rule.
pub(crate) fn check_element(path: &str, element: &Option<Element>) -> DecodeResult<()> {
    match element {
        Some(element) => element.validate(path),
        None => Ok(()),
    }
}

/// Checks a repeating string primitive against its `_name` array.
///
/// Either array may be absent. When both are present they must line up, and
/// every position needs a value, an element, or both.
pub(crate) fn check_repeating(
    path: &str,
    values: &[Option<String>],
    elements: &[Option<Element>],
    check: impl Fn(&str, &str) -> DecodeResult<()>,
) -> DecodeResult<()> {
    if !values.is_empty() && !elements.is_empty() && values.len() != elements.len() {
        return Err(DecodeError::invalid(
            path,
            format!(
                "{} values but {} primitive extension entries",
                values.len(),
                elements.len()
            ),
        ));
    }

    for i in 0..values.len().max(elements.len()) {
        let item_path = format!("{path}[{i}]");
        let value = values.get(i).and_then(Option::as_deref);
        let element = elements.get(i).and_then(Option::as_ref);
        match (value, element) {
            (None, None) => {
                return Err(DecodeError::invalid(
                    item_path,
                    "null entry without a value or extensions",
                ));
            }
            (Some(value), _) => check(&item_path, value)?,
            (None, Some(_)) => {}
        }
        if let Some(element) = element {
            element.validate(&item_path)?;
        }
    }
    Ok(())
}

// ============================================================================
// Complex types
// ============================================================================

/// Resource metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Meta {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Version-specific identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    /// Extensions of `versionId`.
    #[serde(rename = "_versionId", skip_serializing_if = "Option::is_none")]
    pub version_id_ext: Option<Element>,
    /// When the resource version last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Extensions of `lastUpdated`.
    #[serde(rename = "_lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated_ext: Option<Element>,
    /// Identifies where the resource comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Extensions of `source`.
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source_ext: Option<Element>,
    /// Profiles this resource claims to conform to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<Option<String>>,
    /// Extensions of `profile`, position by position.
    #[serde(rename = "_profile", default, skip_serializing_if = "Vec::is_empty")]
    pub profile_ext: Vec<Option<Element>>,
    /// Security labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<Coding>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<Coding>,
}

impl Meta {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_primitive(
            &format!("{path}.versionId"),
            self.version_id.as_deref(),
            &self.version_id_ext,
            check_id,
        )?;
        check_primitive(
            &format!("{path}.lastUpdated"),
            self.last_updated.as_deref(),
            &self.last_updated_ext,
            check_instant,
        )?;
        check_primitive(
            &format!("{path}.source"),
            self.source.as_deref(),
            &self.source_ext,
            check_uri,
        )?;
        check_repeating(
            &format!("{path}.profile"),
            &self.profile,
            &self.profile_ext,
            check_uri,
        )?;
        validate_all(&self.security, &format!("{path}.security"), Coding::validate)?;
        validate_all(&self.tag, &format!("{path}.tag"), Coding::validate)
    }
}

/// Human-readable summary of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Narrative {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// How the narrative was produced.
    pub status: NarrativeStatus,
    /// Extensions of `status`.
    #[serde(rename = "_status", skip_serializing_if = "Option::is_none")]
    pub status_ext: Option<Element>,
    /// Limited XHTML content.
    pub div: String,
}

impl Narrative {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_element(&format!("{path}.status"), &self.status_ext)?;
        if !self.div.trim_start().starts_with("<div") {
            return Err(DecodeError::invalid(
                format!("{path}.div"),
                "narrative must be an XHTML <div> element",
            ));
        }
        Ok(())
    }
}

/// An extension: a `url` plus at most one `value[x]` or nested extensions.
///
/// The `value[x]` element name varies with its type (`valueString`,
/// `valueCoding`, ...), so everything apart from `url` is kept as raw JSON.
/// Numbers keep their exact textual form, so `valueDecimal: 1.50` stays
/// `1.50`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Identifies the meaning of the extension.
    pub url: String,
    /// `id`, `value[x]` and nested `extension` elements.
    #[serde(flatten)]
    pub content: BTreeMap<String, Value>,
}

impl Extension {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        check_uri(&format!("{path}.url"), &self.url)?;

        let mut values = 0;
        for (key, value) in &self.content {
            match key.as_str() {
                "extension" => {
                    let nested: Vec<Extension> = serde_json::from_value(value.clone())
                        .map_err(DecodeError::Structure)?;
                    validate_all(&nested, &format!("{path}.extension"), Extension::validate)?;
                }
                "id" => {}
                // Primitive extensions of the value, e.g. `_valueString`.
                k if k.len() > "_value".len() && k.starts_with("_value") => {
                    let element: Element = serde_json::from_value(value.clone())
                        .map_err(DecodeError::Structure)?;
                    element.validate(&format!("{path}.{}", &k[1..]))?;
                }
                k if k.len() > "value".len() && k.starts_with("value") => values += 1,
                other => {
                    return Err(DecodeError::invalid(
                        path,
                        format!("unknown element '{}' in extension", other),
                    ));
                }
            }
        }

        match values {
            0 if !self.content.contains_key("extension") => Err(DecodeError::invalid(
                path,
                "extension must have a value[x] or nested extensions",
            )),
            0 | 1 => Ok(()),
            _ => Err(DecodeError::invalid(
                path,
                "extension must not have more than one value[x]",
            )),
        }
    }
}

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Coding {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Identity of the terminology system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Extensions of `system`.
    #[serde(rename = "_system", skip_serializing_if = "Option::is_none")]
    pub system_ext: Option<Element>,
    /// Version of the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Extensions of `version`.
    #[serde(rename = "_version", skip_serializing_if = "Option::is_none")]
    pub version_ext: Option<Element>,
    /// Symbol in syntax defined by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Extensions of `code`.
    #[serde(rename = "_code", skip_serializing_if = "Option::is_none")]
    pub code_ext: Option<Element>,
    /// Representation defined by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Extensions of `display`.
    #[serde(rename = "_display", skip_serializing_if = "Option::is_none")]
    pub display_ext: Option<Element>,
    /// Whether this coding was chosen directly by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
    /// Extensions of `userSelected`.
    #[serde(rename = "_userSelected", skip_serializing_if = "Option::is_none")]
    pub user_selected_ext: Option<Element>,
}

impl Coding {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_primitive(
            &format!("{path}.system"),
            self.system.as_deref(),
            &self.system_ext,
            check_uri,
        )?;
        check_primitive(
            &format!("{path}.version"),
            self.version.as_deref(),
            &self.version_ext,
            check_string,
        )?;
        check_primitive(
            &format!("{path}.code"),
            self.code.as_deref(),
            &self.code_ext,
            check_string,
        )?;
        check_primitive(
            &format!("{path}.display"),
            self.display.as_deref(),
            &self.display_ext,
            check_string,
        )?;
        check_element(&format!("{path}.userSelected"), &self.user_selected_ext)
    }
}

/// A concept defined by codings and/or text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodeableConcept {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Codes defined by terminology systems.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
    /// Plain text representation of the concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extensions of `text`.
    #[serde(rename = "_text", skip_serializing_if = "Option::is_none")]
    pub text_ext: Option<Element>,
}

impl CodeableConcept {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        validate_all(&self.coding, &format!("{path}.coding"), Coding::validate)?;
        check_primitive(
            &format!("{path}.text"),
            self.text.as_deref(),
            &self.text_ext,
            check_string,
        )
    }
}

/// A time range defined by start and end dateTimes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Period {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Starting time, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Extensions of `start`.
    #[serde(rename = "_start", skip_serializing_if = "Option::is_none")]
    pub start_ext: Option<Element>,
    /// End time, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Extensions of `end`.
    #[serde(rename = "_end", skip_serializing_if = "Option::is_none")]
    pub end_ext: Option<Element>,
}

impl Period {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_primitive(
            &format!("{path}.start"),
            self.start.as_deref(),
            &self.start_ext,
            check_date_time,
        )?;
        check_primitive(
            &format!("{path}.end"),
            self.end.as_deref(),
            &self.end_ext,
            check_date_time,
        )
    }
}

/// A reference from one resource to another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Reference {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Literal reference, relative, internal or absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Extensions of `reference`.
    #[serde(rename = "_reference", skip_serializing_if = "Option::is_none")]
    pub reference_ext: Option<Element>,
    /// Type the reference refers to.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Extensions of `type`.
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub type_ext: Option<Element>,
    /// Logical reference, when literal reference is not known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,
    /// Text alternative for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Extensions of `display`.
    #[serde(rename = "_display", skip_serializing_if = "Option::is_none")]
    pub display_ext: Option<Element>,
}

impl Reference {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_primitive(
            &format!("{path}.reference"),
            self.reference.as_deref(),
            &self.reference_ext,
            check_string,
        )?;
        check_primitive(
            &format!("{path}.type"),
            self.type_.as_deref(),
            &self.type_ext,
            check_uri,
        )?;
        if let Some(identifier) = &self.identifier {
            identifier.validate(&format!("{path}.identifier"))?;
        }
        check_primitive(
            &format!("{path}.display"),
            self.display.as_deref(),
            &self.display_ext,
            check_string,
        )
    }
}

/// An identifier intended for computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Identifier {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Purpose of this identifier.
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<IdentifierUse>,
    /// Extensions of `use`.
    #[serde(rename = "_use", skip_serializing_if = "Option::is_none")]
    pub use_ext: Option<Element>,
    /// Description of identifier.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    /// The namespace for the identifier value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Extensions of `system`.
    #[serde(rename = "_system", skip_serializing_if = "Option::is_none")]
    pub system_ext: Option<Element>,
    /// The value that is unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Extensions of `value`.
    #[serde(rename = "_value", skip_serializing_if = "Option::is_none")]
    pub value_ext: Option<Element>,
    /// Time period when id is/was valid for use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Organization that issued the identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_element(&format!("{path}.use"), &self.use_ext)?;
        if let Some(type_) = &self.type_ {
            type_.validate(&format!("{path}.type"))?;
        }
        check_primitive(
            &format!("{path}.system"),
            self.system.as_deref(),
            &self.system_ext,
            check_uri,
        )?;
        check_primitive(
            &format!("{path}.value"),
            self.value.as_deref(),
            &self.value_ext,
            check_string,
        )?;
        if let Some(period) = &self.period {
            period.validate(&format!("{path}.period"))?;
        }
        if let Some(assigner) = &self.assigner {
            assigner.validate(&format!("{path}.assigner"))?;
        }
        Ok(())
    }
}

/// A name of a human with text, parts and usage information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HumanName {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Purpose of this name.
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<NameUse>,
    /// Extensions of `use`.
    #[serde(rename = "_use", skip_serializing_if = "Option::is_none")]
    pub use_ext: Option<Element>,
    /// Text representation of the full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extensions of `text`.
    #[serde(rename = "_text", skip_serializing_if = "Option::is_none")]
    pub text_ext: Option<Element>,
    /// Family name (often called 'Surname').
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Extensions of `family`.
    #[serde(rename = "_family", skip_serializing_if = "Option::is_none")]
    pub family_ext: Option<Element>,
    /// Given names (not always 'first'), including middle names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<Option<String>>,
    /// Extensions of `given`, position by position.
    #[serde(rename = "_given", default, skip_serializing_if = "Vec::is_empty")]
    pub given_ext: Vec<Option<Element>>,
    /// Parts that come before the name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix: Vec<Option<String>>,
    /// Extensions of `prefix`, position by position.
    #[serde(rename = "_prefix", default, skip_serializing_if = "Vec::is_empty")]
    pub prefix_ext: Vec<Option<Element>>,
    /// Parts that come after the name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffix: Vec<Option<String>>,
    /// Extensions of `suffix`, position by position.
    #[serde(rename = "_suffix", default, skip_serializing_if = "Vec::is_empty")]
    pub suffix_ext: Vec<Option<Element>>,
    /// Time period when name was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl HumanName {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_element(&format!("{path}.use"), &self.use_ext)?;
        check_primitive(
            &format!("{path}.text"),
            self.text.as_deref(),
            &self.text_ext,
            check_string,
        )?;
        check_primitive(
            &format!("{path}.family"),
            self.family.as_deref(),
            &self.family_ext,
            check_string,
        )?;
        check_repeating(
            &format!("{path}.given"),
            &self.given,
            &self.given_ext,
            check_string,
        )?;
        check_repeating(
            &format!("{path}.prefix"),
            &self.prefix,
            &self.prefix_ext,
            check_string,
        )?;
        check_repeating(
            &format!("{path}.suffix"),
            &self.suffix,
            &self.suffix_ext,
            check_string,
        )?;
        if let Some(period) = &self.period {
            period.validate(&format!("{path}.period"))?;
        }
        Ok(())
    }
}

/// Details for all kinds of technology-mediated contact points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactPoint {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Telecommunications form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,
    /// Extensions of `system`.
    #[serde(rename = "_system", skip_serializing_if = "Option::is_none")]
    pub system_ext: Option<Element>,
    /// The actual contact point details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Extensions of `value`.
    #[serde(rename = "_value", skip_serializing_if = "Option::is_none")]
    pub value_ext: Option<Element>,
    /// Purpose of this contact point.
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<ContactPointUse>,
    /// Extensions of `use`.
    #[serde(rename = "_use", skip_serializing_if = "Option::is_none")]
    pub use_ext: Option<Element>,
    /// Preferred order of use (1 = highest).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Extensions of `rank`.
    #[serde(rename = "_rank", skip_serializing_if = "Option::is_none")]
    pub rank_ext: Option<Element>,
    /// Time period when the contact point was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl ContactPoint {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        // cpt-2
        if self.value.is_some() && self.system.is_none() {
            return Err(DecodeError::invalid(
                path,
                "a system is required if a value is provided",
            ));
        }
        check_element(&format!("{path}.system"), &self.system_ext)?;
        check_primitive(
            &format!("{path}.value"),
            self.value.as_deref(),
            &self.value_ext,
            check_string,
        )?;
        check_element(&format!("{path}.use"), &self.use_ext)?;
        check_primitive(
            &format!("{path}.rank"),
            self.rank.as_ref(),
            &self.rank_ext,
            |p: &str, rank: &u32| check_positive_int(p, *rank),
        )?;
        if let Some(period) = &self.period {
            period.validate(&format!("{path}.period"))?;
        }
        Ok(())
    }
}

/// An address expressed using postal conventions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Purpose of this address.
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<AddressUse>,
    /// Extensions of `use`.
    #[serde(rename = "_use", skip_serializing_if = "Option::is_none")]
    pub use_ext: Option<Element>,
    /// Postal, physical, or both.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<AddressType>,
    /// Extensions of `type`.
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub type_ext: Option<Element>,
    /// Text representation of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Extensions of `text`.
    #[serde(rename = "_text", skip_serializing_if = "Option::is_none")]
    pub text_ext: Option<Element>,
    /// Street name, number, direction and P.O. Box etc.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Option<String>>,
    /// Extensions of `line`, position by position.
    #[serde(rename = "_line", default, skip_serializing_if = "Vec::is_empty")]
    pub line_ext: Vec<Option<Element>>,
    /// Name of city, town etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Extensions of `city`.
    #[serde(rename = "_city", skip_serializing_if = "Option::is_none")]
    pub city_ext: Option<Element>,
    /// District name (aka county).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Extensions of `district`.
    #[serde(rename = "_district", skip_serializing_if = "Option::is_none")]
    pub district_ext: Option<Element>,
    /// Sub-unit of country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Extensions of `state`.
    #[serde(rename = "_state", skip_serializing_if = "Option::is_none")]
    pub state_ext: Option<Element>,
    /// Postal code for area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Extensions of `postalCode`.
    #[serde(rename = "_postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code_ext: Option<Element>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Extensions of `country`.
    #[serde(rename = "_country", skip_serializing_if = "Option::is_none")]
    pub country_ext: Option<Element>,
    /// Time period when address was/is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl Address {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        check_element(&format!("{path}.use"), &self.use_ext)?;
        check_element(&format!("{path}.type"), &self.type_ext)?;
        check_repeating(
            &format!("{path}.line"),
            &self.line,
            &self.line_ext,
            check_string,
        )?;
        let parts = [
            ("text", &self.text, &self.text_ext),
            ("city", &self.city, &self.city_ext),
            ("district", &self.district, &self.district_ext),
            ("state", &self.state, &self.state_ext),
            ("postalCode", &self.postal_code, &self.postal_code_ext),
            ("country", &self.country, &self.country_ext),
        ];
        for (name, value, element) in parts {
            check_primitive(
                &format!("{path}.{name}"),
                value.as_deref(),
                element,
                check_string,
            )?;
        }
        if let Some(period) = &self.period {
            period.validate(&format!("{path}.period"))?;
        }
        Ok(())
    }
}

/// Content in a format defined elsewhere, e.g. a photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Attachment {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Mime type of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Extensions of `contentType`.
    #[serde(rename = "_contentType", skip_serializing_if = "Option::is_none")]
    pub content_type_ext: Option<Element>,
    /// Human language of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Extensions of `language`.
    #[serde(rename = "_language", skip_serializing_if = "Option::is_none")]
    pub language_ext: Option<Element>,
    /// Data inline, base64ed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Extensions of `data`.
    #[serde(rename = "_data", skip_serializing_if = "Option::is_none")]
    pub data_ext: Option<Element>,
    /// Uri where the data can be found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Extensions of `url`.
    #[serde(rename = "_url", skip_serializing_if = "Option::is_none")]
    pub url_ext: Option<Element>,
    /// Number of bytes of content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Extensions of `size`.
    #[serde(rename = "_size", skip_serializing_if = "Option::is_none")]
    pub size_ext: Option<Element>,
    /// Hash of the data (sha-1, base64ed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Extensions of `hash`.
    #[serde(rename = "_hash", skip_serializing_if = "Option::is_none")]
    pub hash_ext: Option<Element>,
    /// Label to display in place of the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Extensions of `title`.
    #[serde(rename = "_title", skip_serializing_if = "Option::is_none")]
    pub title_ext: Option<Element>,
    /// Date attachment was first created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,
    /// Extensions of `creation`.
    #[serde(rename = "_creation", skip_serializing_if = "Option::is_none")]
    pub creation_ext: Option<Element>,
}

impl Attachment {
    pub(crate) fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        // att-1
        if self.data.is_some() && self.content_type.is_none() {
            return Err(DecodeError::invalid(
                path,
                "contentType is required if data is present",
            ));
        }
        check_element(&format!("{path}.contentType"), &self.content_type_ext)?;
        check_element(&format!("{path}.language"), &self.language_ext)?;
        check_element(&format!("{path}.data"), &self.data_ext)?;
        check_primitive(
            &format!("{path}.url"),
            self.url.as_deref(),
            &self.url_ext,
            check_uri,
        )?;
        check_element(&format!("{path}.size"), &self.size_ext)?;
        check_element(&format!("{path}.hash"), &self.hash_ext)?;
        check_primitive(
            &format!("{path}.title"),
            self.title.as_deref(),
            &self.title_ext,
            check_string,
        )?;
        check_primitive(
            &format!("{path}.creation"),
            self.creation.as_deref(),
            &self.creation_ext,
            check_date_time,
        )
    }
}

/// Validates every element of a repeating element, indexing the path.
pub(crate) fn validate_all<T>(
    items: &[T],
    path: &str,
    validate: impl Fn(&T, &str) -> DecodeResult<()>,
) -> DecodeResult<()> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(i, item)| validate(item, &format!("{path}[{i}]")))
}
