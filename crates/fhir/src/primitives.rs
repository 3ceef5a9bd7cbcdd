//! Lexical rules for FHIR primitive types.
//!
//! serde checks JSON types; these functions check the string content of
//! primitives whose FHIR definition is narrower than "any string".

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{DecodeError, DecodeResult};

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("valid id pattern"));

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?$",
    )
    .expect("valid date pattern")
});

static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$",
    )
    .expect("valid dateTime pattern")
});

/// Returns true if `value` is a valid FHIR `id`.
pub fn is_valid_id(value: &str) -> bool {
    ID_PATTERN.is_match(value)
}

/// Checks a FHIR `id`.
pub fn check_id(path: &str, value: &str) -> DecodeResult<()> {
    if is_valid_id(value) {
        Ok(())
    } else {
        Err(DecodeError::invalid(
            path,
            format!(
                "'{}' is not a valid id (1-64 characters from A-Z, a-z, 0-9, '-', '.')",
                value
            ),
        ))
    }
}

/// Checks a FHIR `date` (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
pub fn check_date(path: &str, value: &str) -> DecodeResult<()> {
    if !DATE_PATTERN.is_match(value) {
        return Err(DecodeError::invalid(
            path,
            format!("'{}' is not a valid date", value),
        ));
    }
    check_calendar_day(path, value)
}

/// Checks a FHIR `dateTime`. A time component requires a timezone.
pub fn check_date_time(path: &str, value: &str) -> DecodeResult<()> {
    if !DATE_TIME_PATTERN.is_match(value) {
        return Err(DecodeError::invalid(
            path,
            format!("'{}' is not a valid dateTime", value),
        ));
    }
    check_calendar_day(path, value)
}

/// Checks a FHIR `instant`: a full timestamp with timezone.
pub fn check_instant(path: &str, value: &str) -> DecodeResult<()> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|e| DecodeError::invalid(path, format!("'{}' is not a valid instant: {}", value, e)))
}

/// Checks a FHIR `uri`: non-empty and free of whitespace.
pub fn check_uri(path: &str, value: &str) -> DecodeResult<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(DecodeError::invalid(
            path,
            format!("'{}' is not a valid uri", value),
        ));
    }
    Ok(())
}

/// Checks a FHIR `positiveInt`.
pub fn check_positive_int(path: &str, value: u32) -> DecodeResult<()> {
    if value == 0 {
        return Err(DecodeError::invalid(path, "value must be greater than 0"));
    }
    Ok(())
}

/// Checks a FHIR `string`: FHIR forbids empty strings.
pub fn check_string(path: &str, value: &str) -> DecodeResult<()> {
    if value.trim().is_empty() {
        return Err(DecodeError::invalid(path, "string must not be empty"));
    }
    Ok(())
}

/// The regex accepts day 31 in every month; reject days the calendar lacks.
fn check_calendar_day(path: &str, value: &str) -> DecodeResult<()> {
    let Some(day) = value.get(..10) else {
        return Ok(());
    };
    if day.len() == 10 && NaiveDate::parse_from_str(day, "%Y-%m-%d").is_err() {
        return Err(DecodeError::invalid(
            path,
            format!("'{}' is not a calendar date", day),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_id("abc"));
        assert!(is_valid_id("patient-123.v2"));
        assert!(is_valid_id(&"a".repeat(64)));
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("has space"));
        assert!(!is_valid_id("under_score"));
        assert!(!is_valid_id(&"a".repeat(65)));
    }

    #[test]
    fn test_dates() {
        assert!(check_date("d", "1974").is_ok());
        assert!(check_date("d", "1974-12").is_ok());
        assert!(check_date("d", "1974-12-25").is_ok());
        assert!(check_date("d", "2024-02-29").is_ok());
        assert!(check_date("d", "2023-02-29").is_err());
        assert!(check_date("d", "1974-13").is_err());
        assert!(check_date("d", "25/12/1974").is_err());
        assert!(check_date("d", "1974-12-25T10:00:00Z").is_err());
    }

    #[test]
    fn test_date_times() {
        assert!(check_date_time("d", "2015").is_ok());
        assert!(check_date_time("d", "2015-02-07").is_ok());
        assert!(check_date_time("d", "2015-02-07T13:28:17-05:00").is_ok());
        assert!(check_date_time("d", "2017-01-01T00:00:00.000Z").is_ok());
        // A time without a timezone is not a FHIR dateTime.
        assert!(check_date_time("d", "2015-02-07T13:28:17").is_err());
        assert!(check_date_time("d", "2015-04-31").is_err());
    }

    #[test]
    fn test_instant() {
        assert!(check_instant("m", "2024-01-01T00:00:00Z").is_ok());
        assert!(check_instant("m", "2024-01-01").is_err());
    }

    #[test]
    fn test_uri_and_string() {
        assert!(check_uri("u", "http://hl7.org/fhir").is_ok());
        assert!(check_uri("u", "urn:oid:1.2.3").is_ok());
        assert!(check_uri("u", "").is_err());
        assert!(check_uri("u", "has space").is_err());
        assert!(check_string("s", "Doe").is_ok());
        assert!(check_string("s", "  ").is_err());
    }

    #[test]
    fn test_positive_int() {
        assert!(check_positive_int("rank", 1).is_ok());
        assert!(check_positive_int("rank", 0).is_err());
    }

    #[test]
    fn test_error_carries_path() {
        let err = check_date("Patient.birthDate", "nope").unwrap_err();
        assert!(err.to_string().contains("Patient.birthDate"));
    }
}
