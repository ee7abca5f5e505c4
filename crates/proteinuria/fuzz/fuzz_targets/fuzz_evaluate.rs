//! Fuzz target for evaluation of arbitrary floats.
//!
//! Every bit pattern is tried, including NaN payloads, infinities,
//! subnormals and negative zero.

#![no_main]

use libfuzzer_sys::fuzz_target;
use proteinuria::{evaluate, read_input_json, LabInput};

fuzz_target!(|data: &[u8]| {
    if data.len() >= 24 {
        let value = |i: usize| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
            f64::from_le_bytes(bytes)
        };
        let input = LabInput::new(value(0), value(1), value(2));
        if let Ok(report) = evaluate(&input) {
            assert!(!report.conclusions.is_empty());
            assert!(report.metrics.acr.is_finite() && report.metrics.nap.is_finite());
        }
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = read_input_json(text);
    }
});
