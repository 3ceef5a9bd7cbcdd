//! The FHIR R4 `Patient` resource.
//!
//! See <https://hl7.org/fhir/R4/patient.html>. Choice elements are
//! flattened into one field per allowed type (`deceasedBoolean`,
//! `deceasedDateTime`) and [`FhirResource::validate`] enforces that at most one
//! of them is present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{FhirResource, validate_contained};
use crate::datatypes::{
    Address, AdministrativeGender, Attachment, CodeableConcept, ContactPoint, Element, Extension,
    HumanName, Identifier, Meta, Narrative, Period, Reference, check_element, check_primitive,
    validate_all, validate_base, validate_modifiers,
};
use crate::error::{DecodeError, DecodeResult};
use crate::primitives::{check_date, check_date_time, check_id, check_string, check_uri};

/// Demographics and other administrative information about an individual
/// receiving care.
///
/// `resourceType` is not a field: the codec writes and checks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Patient {
    /// Logical id of this artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Metadata about the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,
    /// Extensions of `implicitRules`.
    #[serde(rename = "_implicitRules", skip_serializing_if = "Option::is_none")]
    pub implicit_rules_ext: Option<Element>,
    /// Language of the resource content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Extensions of `language`.
    #[serde(rename = "_language", skip_serializing_if = "Option::is_none")]
    pub language_ext: Option<Element>,
    /// Text summary of the resource, for human interpretation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    /// Inline resources, kept as raw JSON including their `resourceType`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Value>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
    /// An identifier for this patient.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    /// Whether this patient's record is in active use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Extensions of `active`.
    #[serde(rename = "_active", skip_serializing_if = "Option::is_none")]
    pub active_ext: Option<Element>,
    /// A name associated with the patient.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,
    /// A contact detail for the individual.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,
    /// Administrative gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,
    /// Extensions of `gender`.
    #[serde(rename = "_gender", skip_serializing_if = "Option::is_none")]
    pub gender_ext: Option<Element>,
    /// The date of birth for the individual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Extensions of `birthDate`, e.g. the time of birth.
    #[serde(rename = "_birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date_ext: Option<Element>,
    /// `deceased[x]` as a boolean.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_boolean: Option<bool>,
    /// Extensions of `deceasedBoolean`.
    #[serde(rename = "_deceasedBoolean", skip_serializing_if = "Option::is_none")]
    pub deceased_boolean_ext: Option<Element>,
    /// `deceased[x]` as a dateTime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deceased_date_time: Option<String>,
    /// Extensions of `deceasedDateTime`.
    #[serde(rename = "_deceasedDateTime", skip_serializing_if = "Option::is_none")]
    pub deceased_date_time_ext: Option<Element>,
    /// An address for the individual.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,
    /// Marital (civil) status of a patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<CodeableConcept>,
    /// `multipleBirth[x]` as a boolean.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_birth_boolean: Option<bool>,
    /// Extensions of `multipleBirthBoolean`.
    #[serde(rename = "_multipleBirthBoolean", skip_serializing_if = "Option::is_none")]
    pub multiple_birth_boolean_ext: Option<Element>,
    /// `multipleBirth[x]` as a birth order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_birth_integer: Option<i32>,
    /// Extensions of `multipleBirthInteger`.
    #[serde(rename = "_multipleBirthInteger", skip_serializing_if = "Option::is_none")]
    pub multiple_birth_integer_ext: Option<Element>,
    /// Image of the patient.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<Attachment>,
    /// A contact party (e.g. guardian, partner, friend) for the patient.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<PatientContact>,
    /// Languages which may be used to communicate with the patient.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub communication: Vec<PatientCommunication>,
    /// Patient's nominated primary care provider.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub general_practitioner: Vec<Reference>,
    /// Organization that is the custodian of the patient record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,
    /// Link to another patient resource that concerns the same actual person.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<PatientLink>,
}

/// A contact party for the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientContact {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
    /// The kind of relationship.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationship: Vec<CodeableConcept>,
    /// A name associated with the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,
    /// A contact detail for the person.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,
    /// Address for the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Administrative gender of the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<AdministrativeGender>,
    /// Extensions of `gender`.
    #[serde(rename = "_gender", skip_serializing_if = "Option::is_none")]
    pub gender_ext: Option<Element>,
    /// Organization that is associated with the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,
    /// The period during which this contact person or organization is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// A language which may be used to communicate with the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientCommunication {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
    /// The language.
    pub language: CodeableConcept,
    /// Language preference indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<bool>,
    /// Extensions of `preferred`.
    #[serde(rename = "_preferred", skip_serializing_if = "Option::is_none")]
    pub preferred_ext: Option<Element>,
}

/// Type of link between two patient resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    /// The other patient resource replaces this one.
    ReplacedBy,
    /// This patient resource replaces the other one.
    Replaces,
    /// The other resource holds the authoritative data.
    Refer,
    /// The other resource concerns the same person.
    Seealso,
}

/// Link to another patient resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientLink {
    /// Unique id for inter-element referencing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional content defined by implementations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    /// Extensions that cannot be ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
    /// The other patient or related person resource.
    pub other: Reference,
    /// Type of link.
    #[serde(rename = "type")]
    pub type_: LinkType,
    /// Extensions of `type`.
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub type_ext: Option<Element>,
}

impl FhirResource for Patient {
    const RESOURCE_TYPE: &'static str = "Patient";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn validate(&self) -> DecodeResult<()> {
        if let Some(id) = &self.id {
            check_id("Patient.id", id)?;
        }
        if let Some(meta) = &self.meta {
            meta.validate("Patient.meta")?;
        }
        check_primitive(
            "Patient.implicitRules",
            self.implicit_rules.as_deref(),
            &self.implicit_rules_ext,
            check_uri,
        )?;
        check_primitive(
            "Patient.language",
            self.language.as_deref(),
            &self.language_ext,
            check_string,
        )?;
        if let Some(text) = &self.text {
            text.validate("Patient.text")?;
        }
        validate_all(&self.contained, "Patient.contained", |c, path| {
            validate_contained(path, c)
        })?;
        validate_all(&self.extension, "Patient.extension", Extension::validate)?;
        validate_modifiers("Patient", &self.modifier_extension)?;
        validate_all(&self.identifier, "Patient.identifier", Identifier::validate)?;
        check_element("Patient.active", &self.active_ext)?;
        validate_all(&self.name, "Patient.name", HumanName::validate)?;
        validate_all(&self.telecom, "Patient.telecom", ContactPoint::validate)?;
        check_element("Patient.gender", &self.gender_ext)?;
        check_primitive(
            "Patient.birthDate",
            self.birth_date.as_deref(),
            &self.birth_date_ext,
            check_date,
        )?;

        if self.deceased_boolean.is_some() && self.deceased_date_time.is_some() {
            return Err(DecodeError::invalid(
                "Patient.deceased[x]",
                "only one of deceasedBoolean and deceasedDateTime may be present",
            ));
        }
        check_element("Patient.deceasedBoolean", &self.deceased_boolean_ext)?;
        check_primitive(
            "Patient.deceasedDateTime",
            self.deceased_date_time.as_deref(),
            &self.deceased_date_time_ext,
            check_date_time,
        )?;

        validate_all(&self.address, "Patient.address", Address::validate)?;
        if let Some(status) = &self.marital_status {
            status.validate("Patient.maritalStatus")?;
        }

        if self.multiple_birth_boolean.is_some() && self.multiple_birth_integer.is_some() {
            return Err(DecodeError::invalid(
                "Patient.multipleBirth[x]",
                "only one of multipleBirthBoolean and multipleBirthInteger may be present",
            ));
        }
        check_element(
            "Patient.multipleBirthBoolean",
            &self.multiple_birth_boolean_ext,
        )?;
        check_element(
            "Patient.multipleBirthInteger",
            &self.multiple_birth_integer_ext,
        )?;

        validate_all(&self.photo, "Patient.photo", Attachment::validate)?;
        validate_all(&self.contact, "Patient.contact", PatientContact::validate)?;
        validate_all(
            &self.communication,
            "Patient.communication",
            PatientCommunication::validate,
        )?;
        validate_all(
            &self.general_practitioner,
            "Patient.generalPractitioner",
            Reference::validate,
        )?;
        if let Some(org) = &self.managing_organization {
            org.validate("Patient.managingOrganization")?;
        }
        validate_all(&self.link, "Patient.link", PatientLink::validate)
    }
}

impl PatientContact {
    fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        validate_modifiers(path, &self.modifier_extension)?;
        validate_all(
            &self.relationship,
            &format!("{path}.relationship"),
            CodeableConcept::validate,
        )?;
        if let Some(name) = &self.name {
            name.validate(&format!("{path}.name"))?;
        }
        validate_all(&self.telecom, &format!("{path}.telecom"), ContactPoint::validate)?;
        if let Some(address) = &self.address {
            address.validate(&format!("{path}.address"))?;
        }
        check_element(&format!("{path}.gender"), &self.gender_ext)?;
        if let Some(org) = &self.organization {
            org.validate(&format!("{path}.organization"))?;
        }
        if let Some(period) = &self.period {
            period.validate(&format!("{path}.period"))?;
        }

        // pat-1: SHALL at least contain a contact's details or a reference to an organization
        if self.name.is_none()
            && self.telecom.is_empty()
            && self.address.is_none()
            && self.organization.is_none()
        {
            return Err(DecodeError::invalid(
                path,
                "contact must have a name, telecom, address or organization",
            ));
        }
        Ok(())
    }
}

impl PatientCommunication {
    fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        validate_modifiers(path, &self.modifier_extension)?;
        self.language.validate(&format!("{path}.language"))?;
        check_element(&format!("{path}.preferred"), &self.preferred_ext)
    }
}

impl PatientLink {
    fn validate(&self, path: &str) -> DecodeResult<()> {
        validate_base(path, &self.id, &self.extension)?;
        validate_modifiers(path, &self.modifier_extension)?;
        self.other.validate(&format!("{path}.other"))?;
        check_element(&format!("{path}.type"), &self.type_ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_value;
    use serde_json::json;

    #[test]
    fn test_full_patient_decodes() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "id": "example",
            "meta": {"versionId": "1", "lastUpdated": "2024-01-01T00:00:00Z"},
            "text": {"status": "generated", "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Peter</div>"},
            "identifier": [{
                "use": "usual",
                "type": {"coding": [{"system": "http://terminology.hl7.org/CodeSystem/v2-0203", "code": "MR"}]},
                "system": "urn:oid:1.2.36.146.595.217.0.1",
                "value": "12345",
                "period": {"start": "2001-05-06"}
            }],
            "active": true,
            "name": [
                {"use": "official", "family": "Chalmers", "given": ["Peter", "James"]},
                {"use": "usual", "given": ["Jim"]}
            ],
            "telecom": [
                {"system": "phone", "value": "(03) 5555 6473", "use": "work", "rank": 1}
            ],
            "gender": "male",
            "birthDate": "1974-12-25",
            "deceasedBoolean": false,
            "address": [{
                "use": "home",
                "type": "both",
                "line": ["534 Erewhon St"],
                "city": "PleasantVille",
                "postalCode": "3999"
            }],
            "contact": [{
                "relationship": [{"coding": [{"system": "http://terminology.hl7.org/CodeSystem/v2-0131", "code": "N"}]}],
                "name": {"family": "du Marché", "given": ["Bénédicte"]},
                "gender": "female"
            }],
            "communication": [{"language": {"text": "English"}, "preferred": true}],
            "managingOrganization": {"reference": "Organization/1"},
            "link": [{"other": {"reference": "Patient/pat2"}, "type": "seealso"}]
        }))
        .unwrap();

        assert_eq!(patient.id.as_deref(), Some("example"));
        assert_eq!(patient.gender, Some(AdministrativeGender::Male));
        assert_eq!(patient.name.len(), 2);
        assert_eq!(patient.link[0].type_, LinkType::Seealso);
        assert_eq!(patient.contact[0].gender, Some(AdministrativeGender::Female));
    }

    #[test]
    fn test_both_deceased_choices_rejected() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "deceasedBoolean": true,
            "deceasedDateTime": "2015-02-14T13:42:00+10:00"
        }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("deceased"));
    }

    #[test]
    fn test_both_multiple_birth_choices_rejected() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "multipleBirthBoolean": true,
            "multipleBirthInteger": 2
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_gender_code_rejected() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "gender": "robot"
        }));
        assert!(matches!(result, Err(DecodeError::Structure(_))));
    }

    #[test]
    fn test_invalid_birth_date_rejected() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "birthDate": "1974-02-30"
        }));
        match result {
            Err(DecodeError::InvalidValue { path, .. }) => assert_eq!(path, "Patient.birthDate"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_id_rejected() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "id": "not a valid id"
        }));
        assert!(matches!(result, Err(DecodeError::InvalidValue { .. })));
    }

    #[test]
    fn test_empty_contact_rejected() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "contact": [{"relationship": [{"text": "friend"}]}]
        }));
        match result {
            Err(DecodeError::InvalidValue { path, .. }) => assert_eq!(path, "Patient.contact[0]"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_link_requires_type() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "link": [{"other": {"reference": "Patient/2"}}]
        }));
        assert!(matches!(result, Err(DecodeError::Structure(_))));
    }

    #[test]
    fn test_set_id() {
        let mut patient = Patient::default();
        assert_eq!(FhirResource::id(&patient), None);
        patient.set_id("abc".to_string());
        assert_eq!(FhirResource::id(&patient), Some("abc"));
    }

    #[test]
    fn test_birth_date_with_birth_time_extension() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "birthDate": "1974-12-25",
            "_birthDate": {
                "extension": [{
                    "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
                    "valueDateTime": "1974-12-25T14:35:45-05:00"
                }]
            }
        }))
        .unwrap();
        let birth_time = patient.birth_date_ext.unwrap();
        assert_eq!(
            birth_time.extension[0].content["valueDateTime"],
            "1974-12-25T14:35:45-05:00"
        );
    }

    #[test]
    fn test_primitive_extension_without_value() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "_gender": {
                "extension": [{
                    "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                    "valueCode": "asked-declined"
                }]
            }
        }))
        .unwrap();
        assert_eq!(patient.gender, None);
        assert!(patient.gender_ext.is_some());
    }

    #[test]
    fn test_modifier_extensions_accepted() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "modifierExtension": [{
                "url": "http://example.org/fhir/StructureDefinition/test-patient",
                "valueBoolean": true
            }],
            "contact": [{
                "modifierExtension": [{
                    "url": "http://example.org/fhir/StructureDefinition/legal-guardian",
                    "valueBoolean": false
                }],
                "organization": {"reference": "Organization/1"}
            }],
            "communication": [{
                "modifierExtension": [{
                    "url": "http://example.org/fhir/StructureDefinition/interpreter",
                    "valueBoolean": true
                }],
                "language": {"text": "Dutch"}
            }]
        }))
        .unwrap();
        assert_eq!(patient.modifier_extension.len(), 1);
        assert_eq!(patient.contact[0].modifier_extension.len(), 1);
        assert_eq!(patient.communication[0].modifier_extension.len(), 1);
    }

    #[test]
    fn test_invalid_modifier_extension_reports_path() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "modifierExtension": [{"url": "http://example.org/ext"}]
        }));
        match result {
            Err(DecodeError::InvalidValue { path, .. }) => {
                assert_eq!(path, "Patient.modifierExtension[0]")
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_name_with_element_id_and_extension() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "name": [{
                "id": "name-1",
                "extension": [{
                    "url": "http://hl7.org/fhir/StructureDefinition/language",
                    "valueCode": "nl"
                }],
                "family": "van de Heuvel"
            }]
        }))
        .unwrap();
        assert_eq!(patient.name[0].id.as_deref(), Some("name-1"));
        assert_eq!(patient.name[0].extension[0].content["valueCode"], "nl");
    }

    #[test]
    fn test_given_with_null_entry() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "name": [{
                "family": "Chalmers",
                "given": ["Peter", null],
                "_given": [null, {
                    "extension": [{
                        "url": "http://hl7.org/fhir/StructureDefinition/iso21090-EN-qualifier",
                        "valueCode": "IN"
                    }]
                }]
            }]
        }))
        .unwrap();
        assert_eq!(patient.name[0].given, vec![Some("Peter".to_string()), None]);
        assert!(patient.name[0].given_ext[1].is_some());
    }

    #[test]
    fn test_meta_only_patient() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "meta": {
                "profile": ["http://hl7.org/fhir/us/core/StructureDefinition/us-core-patient"],
                "tag": [{"system": "http://example.org/tags", "code": "test"}]
            }
        }))
        .unwrap();
        let meta = patient.meta.unwrap();
        assert_eq!(meta.profile.len(), 1);
        assert_eq!(meta.tag[0].code.as_deref(), Some("test"));
    }

    #[test]
    fn test_link_type_extension() {
        let patient: Patient = decode_value(json!({
            "resourceType": "Patient",
            "link": [{
                "id": "l1",
                "other": {"reference": "Patient/2"},
                "type": "replaced-by",
                "_type": {"id": "t1"}
            }]
        }))
        .unwrap();
        assert_eq!(patient.link[0].type_, LinkType::ReplacedBy);
        assert_eq!(patient.link[0].type_ext.as_ref().unwrap().id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_primitive_extension_still_rejects_unknown_elements() {
        let result: DecodeResult<Patient> = decode_value(json!({
            "resourceType": "Patient",
            "_favouriteColour": {"id": "x"}
        }));
        assert!(matches!(result, Err(DecodeError::Structure(_))));
    }
}
