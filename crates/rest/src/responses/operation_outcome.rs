//! OperationOutcome response generation.
//!
//! Provides utilities for building FHIR OperationOutcome responses. Each
//! issue carries its code both as `code` and as a coding in `details`.

use serde_json::Value;

/// Code system of the issue type value set.
pub const ISSUE_TYPE_SYSTEM: &str = "http://hl7.org/fhir/issue-type";

/// Issue type codes from the FHIR value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Resource not found.
    NotFound,
    /// Duplicate resource.
    Duplicate,
    /// Unexpected internal error.
    Exception,
    /// Transient error, the request may be retried.
    Transient,
}

impl IssueType {
    /// Returns the FHIR code string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::NotFound => "not-found",
            IssueType::Duplicate => "duplicate",
            IssueType::Exception => "exception",
            IssueType::Transient => "transient",
        }
    }
}

/// An error issue in an OperationOutcome.
///
/// Every outcome this server produces reports a failed interaction, so the
/// severity is always `error`.
#[derive(Debug, Clone)]
pub struct Issue {
    /// The type/code of the issue.
    pub code: IssueType,
    /// Human-readable description.
    pub details: String,
}

impl Issue {
    /// Creates an error issue.
    pub fn error(code: IssueType, details: impl Into<String>) -> Self {
        Self {
            code,
            details: details.into(),
        }
    }

    /// Converts to FHIR JSON.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "severity": "error",
            "code": self.code.as_str(),
            "details": {
                "coding": [{
                    "system": ISSUE_TYPE_SYSTEM,
                    "code": self.code.as_str()
                }],
                "text": self.details
            }
        })
    }
}

/// Builder for OperationOutcome resources.
#[derive(Debug, Default)]
pub struct OperationOutcomeBuilder {
    issues: Vec<Issue>,
}

impl OperationOutcomeBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue.
    pub fn add_issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    /// Adds an error issue.
    pub fn error(self, code: IssueType, details: impl Into<String>) -> Self {
        self.add_issue(Issue::error(code, details))
    }

    /// Builds the OperationOutcome resource.
    pub fn build(self) -> Value {
        let issues: Vec<Value> = self.issues.iter().map(|i| i.to_json()).collect();

        serde_json::json!({
            "resourceType": "OperationOutcome",
            "issue": issues
        })
    }
}

/// Creates a simple error OperationOutcome.
pub fn error_outcome(code: IssueType, message: &str) -> Value {
    OperationOutcomeBuilder::new().error(code, message).build()
}
