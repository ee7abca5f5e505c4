//! Validation issue types.

use serde::{Deserialize, Serialize};

/// Kind of problem found in a lab input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Missing, non-numeric, negative, or non-positive creatinine.
    InvalidValue,
    /// Albumin exceeds total protein.
    Inconsistent,
    /// Creatinine suggests a very dilute or concentrated sample.
    AtypicalDilution,
    /// Value outside any plausible laboratory range.
    ImplausibleValue,
    /// A derived ratio does not fit in a finite number.
    RatioOverflow,
}

impl IssueKind {
    /// Get a human-readable label for the issue kind.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::InvalidValue => "Invalid Value",
            IssueKind::Inconsistent => "Inconsistent Values",
            IssueKind::AtypicalDilution => "Atypical Dilution",
            IssueKind::ImplausibleValue => "Implausible Value",
            IssueKind::RatioOverflow => "Ratio Overflow",
        }
    }
}

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Clinically atypical; computation proceeds.
    Warning,
    /// Invalid input; computation is blocked.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A single problem with a lab input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Kind of problem.
    pub kind: IssueKind,
    /// Severity level.
    pub severity: Severity,
    /// Fields involved, in input order.
    pub fields: Vec<String>,
    /// User-facing message.
    pub message: String,
}

impl Issue {
    /// Create a new issue.
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            fields: Vec::new(),
            message: message.into(),
        }
    }

    /// Set the fields involved.
    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Whether this issue blocks evaluation.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Outcome of validating one lab input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Blocking problems, in rule order.
    pub errors: Vec<Issue>,
    /// Non-blocking problems, in rule order.
    pub warnings: Vec<Issue>,
}

impl ValidationResult {
    /// Sort issues into errors and warnings, keeping their order.
    pub fn from_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let (errors, warnings) = issues.into_iter().partition(Issue::is_error);
        Self { errors, warnings }
    }

    /// True when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|i| i.message.clone()).collect()
    }

    /// Warning messages in order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|i| i.message.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_keeps_order() {
        let result = ValidationResult::from_issues(vec![
            Issue::new(IssueKind::AtypicalDilution, Severity::Warning, "w1"),
            Issue::new(IssueKind::InvalidValue, Severity::Error, "e1"),
            Issue::new(IssueKind::ImplausibleValue, Severity::Warning, "w2"),
            Issue::new(IssueKind::Inconsistent, Severity::Error, "e2"),
        ]);

        assert!(!result.is_valid());
        assert_eq!(result.error_messages(), vec!["e1", "e2"]);
        assert_eq!(result.warning_messages(), vec!["w1", "w2"]);
    }

    #[test]
    fn test_issue_fields() {
        let issue = Issue::new(IssueKind::Inconsistent, Severity::Error, "albumin > protein")
            .with_fields(&["albumin", "protein"]);
        assert_eq!(issue.fields, vec!["albumin", "protein"]);
        assert!(issue.is_error());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }
}
