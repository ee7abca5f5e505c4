//! Main evaluator and public API.

use serde::{Deserialize, Serialize};

use crate::classify::Categories;
use crate::conclusion::{self, ROUTINE_SCREENING_MESSAGE};
use crate::error::{EvaluationError, Result};
use crate::input::LabInput;
use crate::metrics::{AprPrecision, Metrics};
use crate::validation::{ValidationEngine, ValidationResult};

/// Configuration for evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// APR value used for category thresholds.
    pub apr_precision: AprPrecision,
}

impl EvaluatorConfig {
    /// Set the APR precision.
    pub fn with_apr_precision(mut self, precision: AprPrecision) -> Self {
        self.apr_precision = precision;
        self
    }
}

/// Formatted values for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayValues {
    pub acr: String,
    pub acr_category: String,
    pub pcr: String,
    pub pcr_category: String,
    pub apr: String,
    /// Empty when APR is not applicable.
    pub apr_category: String,
    pub nap: String,
    pub nap_category: String,
}

impl DisplayValues {
    fn new(metrics: &Metrics, categories: &Categories) -> Self {
        Self {
            acr: metrics.acr_display(),
            acr_category: categories.acr.label().to_string(),
            pcr: metrics.pcr_display(),
            pcr_category: categories.pcr.label().to_string(),
            apr: metrics.apr.display(),
            apr_category: categories.apr_label().to_string(),
            nap: metrics.nap_display(),
            nap_category: categories.nap.label().to_string(),
        }
    }
}

/// Result of evaluating one set of lab values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The evaluated input.
    pub input: LabInput,
    /// Non-blocking validation messages.
    pub warnings: Vec<String>,
    /// Derived ratios.
    pub metrics: Metrics,
    /// Category per metric.
    pub categories: Categories,
    /// Ordered conclusions; the last entry carries the recommendations.
    pub conclusions: Vec<String>,
    /// Recommendation text in effect for this report.
    pub recommendations: String,
    /// ACR and PCR are both normal, so only routine screening applies.
    pub routine_screening: bool,
    /// Formatted values for presentation.
    pub display: DisplayValues,
}

impl EvaluationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// The biomarker evaluation engine.
///
/// Holds only configuration; every call returns a fresh report.
pub struct Evaluator {
    config: EvaluatorConfig,
    validation: ValidationEngine,
}

impl Evaluator {
    /// Create a new evaluator with default configuration.
    pub fn new() -> Self {
        Self::with_config(EvaluatorConfig::default())
    }

    /// Create an evaluator with custom configuration.
    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self {
            config,
            validation: ValidationEngine::new(),
        }
    }

    /// Validate an input without computing anything.
    pub fn validate(&self, input: &LabInput) -> ValidationResult {
        self.validation.validate(input)
    }

    /// Validate, compute, classify, and assemble conclusions.
    ///
    /// Returns only the error messages when validation fails; no metrics are
    /// computed for invalid input.
    pub fn evaluate(&self, input: &LabInput) -> Result<EvaluationReport> {
        let validation = self.validate(input);
        if !validation.is_valid() {
            tracing::debug!(errors = validation.errors.len(), "input rejected");
            return Err(EvaluationError::InvalidInput {
                errors: validation.error_messages(),
            });
        }

        let metrics = Metrics::compute(input);
        let categories = Categories::classify(&metrics, self.config.apr_precision);
        tracing::debug!(
            acr = metrics.acr,
            pcr = metrics.pcr,
            apr = %metrics.apr.display(),
            nap = metrics.nap,
            "metrics computed"
        );

        let conclusions = conclusion::build_conclusions(&metrics, &categories);
        let routine_screening = conclusion::is_routine_screening(&categories);
        let recommendations = if routine_screening {
            tracing::debug!("acr and pcr normal, routine screening only");
            ROUTINE_SCREENING_MESSAGE.to_string()
        } else {
            conclusion::recommendations(&metrics)
        };

        Ok(EvaluationReport {
            input: *input,
            warnings: validation.warning_messages(),
            metrics,
            categories,
            conclusions,
            recommendations,
            routine_screening,
            display: DisplayValues::new(&metrics, &categories),
        })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate with the default configuration.
pub fn evaluate(input: &LabInput) -> Result<EvaluationReport> {
    Evaluator::new().evaluate(input)
}
