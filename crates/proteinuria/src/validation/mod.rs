//! Validation of lab inputs before any computation.

mod issue;
mod validators;

pub use issue::{Issue, IssueKind, Severity, ValidationResult};
pub use validators::{
    AlbuminProteinValidator, CreatinineRangeValidator, NumericValidator, ProteinRangeValidator,
    RatioOverflowValidator, ValidationEngine, Validator, ALBUMIN_EXCEEDS_PROTEIN_MESSAGE,
    ATYPICAL_CREATININE_MESSAGE, EXTREME_PROTEIN_MESSAGE, INVALID_VALUE_MESSAGE,
    RATIO_OVERFLOW_MESSAGE,
};
