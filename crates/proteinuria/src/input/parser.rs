//! Lenient parsing of lab values from form text and JSON documents.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::lab::LabInput;
use crate::error::{EvaluationError, Result};

// Leading float prefix, the way a browser form field reads "12.5 mg/L".
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

static INFINITY_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-]?)Infinity").unwrap());

/// Field names accepted in JSON input documents.
const FIELDS: [&str; 3] = ["albumin", "protein", "creatinine"];

/// Parse a lab value from free text.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// trailing units are ignored. Text with no numeric prefix yields NaN.
pub fn parse_lab_value(text: &str) -> f64 {
    let text = text.trim_start();

    if let Some(m) = NUMBER_PREFIX.find(text) {
        return m.as_str().parse().unwrap_or(f64::NAN);
    }

    if let Some(caps) = INFINITY_PREFIX.captures(text) {
        return if &caps[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    f64::NAN
}

/// Read a lab input from a JSON document.
///
/// The document must be an object. Each field may be a number, a numeric
/// string, or absent/null (read as NaN so validation reports it).
pub fn read_input_json(json: &str) -> Result<LabInput> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or_else(|| {
        EvaluationError::Input("expected a JSON object with albumin, protein, creatinine".into())
    })?;

    let mut values = [f64::NAN; 3];
    for (slot, field) in values.iter_mut().zip(FIELDS) {
        *slot = match object.get(field) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(s)) => parse_lab_value(s),
            _ => f64::NAN,
        };
    }

    Ok(LabInput::new(values[0], values[1], values[2]))
}

/// Read a lab input from a JSON file.
pub fn read_input_file(path: impl AsRef<Path>) -> Result<LabInput> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| EvaluationError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_input_json(&contents)
}
