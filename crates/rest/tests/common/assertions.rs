//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the body is an OperationOutcome with one error issue of `code`.
///
/// Returns the issue's details text.
pub fn assert_operation_outcome(response: &TestResponse, code: &str) -> String {
    let body: Value = response.json();
    assert_eq!(body["resourceType"], "OperationOutcome", "body: {body}");

    let issue = &body["issue"][0];
    assert_eq!(issue["severity"], "error");
    assert_eq!(issue["code"], code);
    assert_eq!(
        issue["details"]["coding"][0]["system"],
        "http://hl7.org/fhir/issue-type"
    );
    assert_eq!(issue["details"]["coding"][0]["code"], code);

    issue["details"]["text"]
        .as_str()
        .expect("Issue details should have text")
        .to_string()
}

/// Asserts that the body is a decode failure report and returns its details.
pub fn assert_parse_error(response: &TestResponse) -> String {
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to parse resource", "body: {body}");

    let details = body["details"]
        .as_str()
        .expect("Parse error should have details")
        .to_string();
    assert!(!details.is_empty());
    details
}

/// Asserts that the response carries the FHIR JSON content type.
pub fn assert_fhir_json(response: &TestResponse) {
    let content_type = response.header("content-type");
    assert_eq!(content_type, "application/fhir+json");
}
