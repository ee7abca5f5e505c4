//! Proteinuria: urine albumin and protein biomarker evaluation.
//!
//! From three spot-urine measurements (albumin, total protein, creatinine,
//! all in mg/L) the evaluator derives four ratios, classifies each one, and
//! assembles clinical conclusions with recommendations.
//!
//! | Metric | Definition |
//! |---|---|
//! | ACR | albumin / creatinine × 1000 (mg/g) |
//! | PCR | protein / creatinine × 1000 (mg/g) |
//! | APR | ACR / PCR |
//! | NAP | PCR − ACR (mg/g) |
//!
//! # Example
//!
//! ```
//! use proteinuria::{Evaluator, LabInput};
//!
//! let evaluator = Evaluator::new();
//! let report = evaluator.evaluate(&LabInput::new(30.0, 4000.0, 1000.0)).unwrap();
//!
//! println!("ACR: {} ({})", report.display.acr, report.display.acr_category);
//! for conclusion in &report.conclusions {
//!     println!("- {}", conclusion);
//! }
//! ```

pub mod classify;
pub mod conclusion;
pub mod error;
pub mod input;
pub mod metrics;
pub mod validation;

mod evaluator;

pub use crate::evaluator::{
    evaluate, DisplayValues, EvaluationReport, Evaluator, EvaluatorConfig,
};
pub use classify::{AcrCategory, AprCategory, Categories, NapCategory, PcrCategory};
pub use error::{EvaluationError, Result};
pub use input::{parse_lab_value, read_input_file, read_input_json, LabInput};
pub use metrics::{Apr, AprPrecision, Metrics};
pub use validation::{Issue, IssueKind, Severity, ValidationResult};
