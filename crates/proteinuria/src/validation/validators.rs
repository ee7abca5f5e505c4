//! Input validators.

use crate::input::LabInput;

use super::issue::{Issue, IssueKind, Severity, ValidationResult};

/// Message for missing, non-numeric, or out-of-domain values.
pub const INVALID_VALUE_MESSAGE: &str = "All inputs must be positive numbers (creatinine >0).";

/// Message for albumin exceeding total protein.
pub const ALBUMIN_EXCEEDS_PROTEIN_MESSAGE: &str =
    "Urine albumin cannot exceed urine protein. Please check inputs.";

/// Message for creatinine outside the typical dilution range.
pub const ATYPICAL_CREATININE_MESSAGE: &str = "Urine creatinine value is atypical (normal range ~500-2000 mg/L). Results may be unreliable; consider dilute/concentrated sample.";

/// Message for protein outside the plausible range.
pub const EXTREME_PROTEIN_MESSAGE: &str = "Urine protein value is extreme. Verify lab results.";

/// Message for values whose ratios to creatinine overflow.
pub const RATIO_OVERFLOW_MESSAGE: &str =
    "Calculated ratios are too large to represent. Please check inputs.";

/// Trait for lab input validators.
pub trait Validator: Send + Sync {
    /// Check the input and return any issues found.
    fn validate(&self, input: &LabInput) -> Vec<Issue>;

    /// Get the validator name.
    fn name(&self) -> &'static str;
}

/// Rejects non-finite values, negative albumin or protein, and creatinine ≤ 0.
pub struct NumericValidator;

impl Validator for NumericValidator {
    fn validate(&self, input: &LabInput) -> Vec<Issue> {
        let invalid = !input.is_finite()
            || input.albumin < 0.0
            || input.protein < 0.0
            || input.creatinine <= 0.0;

        if invalid {
            vec![
                Issue::new(IssueKind::InvalidValue, Severity::Error, INVALID_VALUE_MESSAGE)
                    .with_fields(&["albumin", "protein", "creatinine"]),
            ]
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}

/// Rejects albumin greater than total protein; albumin is a fraction of it.
pub struct AlbuminProteinValidator;

impl Validator for AlbuminProteinValidator {
    fn validate(&self, input: &LabInput) -> Vec<Issue> {
        if input.albumin > input.protein {
            vec![
                Issue::new(
                    IssueKind::Inconsistent,
                    Severity::Error,
                    ALBUMIN_EXCEEDS_PROTEIN_MESSAGE,
                )
                .with_fields(&["albumin", "protein"]),
            ]
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &'static str {
        "albumin_protein"
    }
}

/// Rejects otherwise valid values whose ratios to creatinine overflow.
///
/// Only inputs that pass the numeric rule are checked, so each bad input
/// yields one error.
pub struct RatioOverflowValidator;

impl Validator for RatioOverflowValidator {
    fn validate(&self, input: &LabInput) -> Vec<Issue> {
        if !input.is_finite() || input.creatinine <= 0.0 {
            return Vec::new();
        }

        let overflows = |value: f64| !(value / input.creatinine * 1000.0).is_finite();
        if overflows(input.albumin) || overflows(input.protein) {
            vec![
                Issue::new(IssueKind::RatioOverflow, Severity::Error, RATIO_OVERFLOW_MESSAGE)
                    .with_fields(&["albumin", "protein", "creatinine"]),
            ]
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &'static str {
        "ratio_overflow"
    }
}

/// Warns when creatinine suggests a very dilute or concentrated sample.
pub struct CreatinineRangeValidator {
    /// Lowest typical creatinine (mg/L).
    pub min: f64,
    /// Highest typical creatinine (mg/L).
    pub max: f64,
}

impl Default for CreatinineRangeValidator {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 5000.0,
        }
    }
}

impl Validator for CreatinineRangeValidator {
    fn validate(&self, input: &LabInput) -> Vec<Issue> {
        if input.creatinine < self.min || input.creatinine > self.max {
            vec![
                Issue::new(
                    IssueKind::AtypicalDilution,
                    Severity::Warning,
                    ATYPICAL_CREATININE_MESSAGE,
                )
                .with_fields(&["creatinine"]),
            ]
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &'static str {
        "creatinine_range"
    }
}

/// Warns when total protein is outside any plausible laboratory value.
pub struct ProteinRangeValidator {
    /// Lowest plausible protein (mg/L).
    pub min: f64,
    /// Highest plausible protein (mg/L).
    pub max: f64,
}

impl Default for ProteinRangeValidator {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10000.0,
        }
    }
}

impl Validator for ProteinRangeValidator {
    fn validate(&self, input: &LabInput) -> Vec<Issue> {
        if input.protein < self.min || input.protein > self.max {
            vec![
                Issue::new(
                    IssueKind::ImplausibleValue,
                    Severity::Warning,
                    EXTREME_PROTEIN_MESSAGE,
                )
                .with_fields(&["protein"]),
            ]
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &'static str {
        "protein_range"
    }
}

/// Runs all validators in a fixed order.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationEngine {
    /// Create a new validation engine with all default validators.
    pub fn new() -> Self {
        Self {
            validators: vec![
                Box::new(NumericValidator),
                Box::new(AlbuminProteinValidator),
                Box::new(RatioOverflowValidator),
                Box::new(CreatinineRangeValidator::default()),
                Box::new(ProteinRangeValidator::default()),
            ],
        }
    }

    /// Run all validators and collect issues.
    ///
    /// Every validator runs, so warnings are reported even when an error is
    /// present.
    pub fn validate(&self, input: &LabInput) -> ValidationResult {
        let issues = self.validators.iter().flat_map(|validator| {
            let issues = validator.validate(input);
            if !issues.is_empty() {
                tracing::debug!(validator = validator.name(), count = issues.len(), "issues found");
            }
            issues
        });

        ValidationResult::from_issues(issues)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
