//! The three urine measurements an evaluation starts from.

use serde::{Deserialize, Serialize};

use super::parser::parse_lab_value;

/// Spot urine measurements, all in mg/L.
///
/// Values are stored as entered. Missing or non-numeric fields are NaN and
/// are rejected by validation, never by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabInput {
    /// Urine albumin (mg/L).
    pub albumin: f64,
    /// Urine total protein (mg/L).
    pub protein: f64,
    /// Urine creatinine (mg/L).
    pub creatinine: f64,
}

impl LabInput {
    /// Create an input from numeric values.
    pub fn new(albumin: f64, protein: f64, creatinine: f64) -> Self {
        Self {
            albumin,
            protein,
            creatinine,
        }
    }

    /// Create an input from free-text form fields.
    pub fn parse(albumin: &str, protein: &str, creatinine: &str) -> Self {
        Self::new(
            parse_lab_value(albumin),
            parse_lab_value(protein),
            parse_lab_value(creatinine),
        )
    }

    /// Whether every field holds a finite number.
    pub fn is_finite(&self) -> bool {
        self.albumin.is_finite() && self.protein.is_finite() && self.creatinine.is_finite()
    }
}
