//! Fuzz target for free-text lab value parsing.
//!
//! This fuzzer tests that parsing and evaluation:
//! 1. Never panic on arbitrary text
//! 2. Turn unparseable text into a validation error, not a crash

#![no_main]

use libfuzzer_sys::fuzz_target;
use proteinuria::{evaluate, parse_lab_value, LabInput};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 10_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_lab_value(text);

        // Split into three form fields on newlines
        let mut fields = text.splitn(3, '\n');
        let albumin = fields.next().unwrap_or("");
        let protein = fields.next().unwrap_or("");
        let creatinine = fields.next().unwrap_or("");
        let _ = evaluate(&LabInput::parse(albumin, protein, creatinine));
    }
});
