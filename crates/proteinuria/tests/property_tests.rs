//! Property-based tests for the biomarker evaluator.
//!
//! These tests use proptest to generate lab values and verify that
//! evaluation maintains its invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: Evaluation never crashes on any input, including NaN
//! 2. **Totality**: Every physiologically valid input produces a report
//! 3. **Monotonicity**: Ratios move with their numerator and against creatinine
//! 4. **Invariants**: NAP = PCR − ACR, APR defined iff protein > 0
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p proteinuria --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p proteinuria --test property_tests
//! ```

use proptest::prelude::*;

use proteinuria::validation::{
    ALBUMIN_EXCEEDS_PROTEIN_MESSAGE, ATYPICAL_CREATININE_MESSAGE, EXTREME_PROTEIN_MESSAGE,
    INVALID_VALUE_MESSAGE,
};
use proteinuria::{evaluate, parse_lab_value, Apr, Evaluator, LabInput, Metrics};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate a physiologically valid input: 0 ≤ albumin ≤ protein, creatinine > 0.
fn valid_input() -> impl Strategy<Value = LabInput> {
    (0.0f64..20000.0, 0.0f64..=1.0, 0.001f64..20000.0).prop_map(
        |(protein, fraction, creatinine)| LabInput::new(protein * fraction, protein, creatinine),
    )
}

/// Generate any float, including NaN, infinities and negatives.
fn any_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(0.0),
        -1000.0f64..1000.0,
    ]
}

/// Generate form text that may or may not be numeric.
fn form_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}(\\.[0-9]{1,4})?",
        "\\s*[+-]?[0-9]{0,4}\\.?[0-9]{0,4}([eE][+-]?[0-9]{1,3})?[a-z /]{0,8}",
        "[a-zA-Z0-9 .,/+-]{0,20}",
    ]
}

// =============================================================================
// Validation Properties
// =============================================================================

mod validation_tests {
    use super::*;

    proptest! {
        /// Valid inputs always produce a report.
        #[test]
        fn valid_input_always_evaluates(input in valid_input()) {
            let result = evaluate(&input);
            prop_assert!(result.is_ok(), "valid input {:?} rejected: {:?}", input, result);
        }

        /// Albumin above protein yields exactly the relation error.
        #[test]
        fn albumin_above_protein_is_single_error(
            protein in 0.0f64..10000.0,
            excess in 0.001f64..1000.0,
            creatinine in 0.001f64..10000.0,
        ) {
            let input = LabInput::new(protein + excess, protein, creatinine);
            let err = evaluate(&input).unwrap_err();
            let expected = vec![ALBUMIN_EXCEEDS_PROTEIN_MESSAGE.to_string()];
            prop_assert_eq!(err.validation_errors(), Some(expected.as_slice()));
        }

        /// Non-positive creatinine always errors, whatever else is entered.
        #[test]
        fn non_positive_creatinine_always_errors(
            albumin in any_value(),
            protein in any_value(),
            creatinine in -10000.0f64..=0.0,
        ) {
            let err = evaluate(&LabInput::new(albumin, protein, creatinine)).unwrap_err();
            let errors = err.validation_errors().unwrap_or_default();
            prop_assert!(errors.iter().any(|e| e == INVALID_VALUE_MESSAGE));
        }

        /// Evaluation never panics, whatever the values.
        #[test]
        fn never_panics_on_any_value(
            albumin in any_value(),
            protein in any_value(),
            creatinine in any_value(),
        ) {
            let _ = evaluate(&LabInput::new(albumin, protein, creatinine));
        }

        /// Creatinine warning iff creatinine is outside [10, 5000].
        #[test]
        fn creatinine_warning_iff_out_of_range(
            albumin in any_value(),
            protein in any_value(),
            creatinine in -100.0f64..10000.0,
        ) {
            let result = Evaluator::new().validate(&LabInput::new(albumin, protein, creatinine));
            let warned = result.warning_messages().iter().any(|w| w == ATYPICAL_CREATININE_MESSAGE);
            prop_assert_eq!(warned, !(10.0..=5000.0).contains(&creatinine));
        }

        /// Protein warning iff protein is outside [1, 10000].
        #[test]
        fn protein_warning_iff_out_of_range(
            albumin in any_value(),
            protein in -100.0f64..20000.0,
            creatinine in any_value(),
        ) {
            let result = Evaluator::new().validate(&LabInput::new(albumin, protein, creatinine));
            let warned = result.warning_messages().iter().any(|w| w == EXTREME_PROTEIN_MESSAGE);
            prop_assert_eq!(warned, !(1.0..=10000.0).contains(&protein));
        }
    }
}

// =============================================================================
// Metric Properties
// =============================================================================

mod metric_tests {
    use super::*;

    proptest! {
        /// NAP is exactly PCR − ACR.
        #[test]
        fn nap_is_pcr_minus_acr(input in valid_input()) {
            let metrics = Metrics::compute(&input);
            let expected = metrics.pcr - metrics.acr;
            prop_assert!((metrics.nap - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        /// APR is not applicable iff protein is zero.
        #[test]
        fn apr_not_applicable_iff_no_protein(input in valid_input()) {
            let metrics = Metrics::compute(&input);
            prop_assert_eq!(metrics.apr == Apr::NotApplicable, input.protein == 0.0);
        }

        /// APR never exceeds 1 because albumin is part of total protein.
        #[test]
        fn apr_at_most_one(input in valid_input()) {
            if let Some(apr) = Metrics::compute(&input).apr.raw() {
                prop_assert!(apr <= 1.0 + 1e-12);
            }
        }

        /// ACR and PCR increase with their numerator.
        #[test]
        fn ratios_increase_with_numerator(
            input in valid_input(),
            extra in 0.001f64..1000.0,
        ) {
            let base = Metrics::compute(&input);

            let more_albumin = LabInput { albumin: input.albumin + extra, ..input };
            prop_assert!(Metrics::compute(&more_albumin).acr >= base.acr);

            let more_protein = LabInput { protein: input.protein + extra, ..input };
            prop_assert!(Metrics::compute(&more_protein).pcr >= base.pcr);
        }

        /// ACR and PCR decrease as creatinine rises.
        #[test]
        fn ratios_decrease_with_creatinine(
            input in valid_input(),
            extra in 0.001f64..1000.0,
        ) {
            let base = Metrics::compute(&input);
            let diluted = Metrics::compute(&LabInput {
                creatinine: input.creatinine + extra,
                ..input
            });
            prop_assert!(diluted.acr <= base.acr);
            prop_assert!(diluted.pcr <= base.pcr);
        }
    }
}

// =============================================================================
// Conclusion Properties
// =============================================================================

mod conclusion_tests {
    use super::*;

    proptest! {
        /// Both ratios normal always collapses to one screening message.
        #[test]
        fn normal_ratios_give_single_conclusion(input in valid_input()) {
            let report = evaluate(&input).unwrap();
            let normal = report.metrics.acr < 30.0 && report.metrics.pcr < 150.0;
            prop_assert_eq!(report.routine_screening, normal);
            if normal {
                prop_assert_eq!(report.conclusions.len(), 1);
            } else {
                prop_assert!(report.conclusions.len() >= 4);
                prop_assert_eq!(report.conclusions.last(), Some(&report.recommendations));
            }
        }

        /// Same input, same report.
        #[test]
        fn evaluation_is_deterministic(input in valid_input()) {
            prop_assert_eq!(evaluate(&input).unwrap(), evaluate(&input).unwrap());
        }
    }
}

// =============================================================================
// Parsing Properties
// =============================================================================

mod parsing_tests {
    use super::*;

    proptest! {
        /// Free-text parsing never panics and never errors.
        #[test]
        fn parse_never_panics(text in form_text()) {
            let _ = parse_lab_value(&text);
        }

        /// Plain decimal text parses to the same value as the standard parser.
        #[test]
        fn plain_decimals_parse_exactly(value in 0.0f64..1.0e6) {
            let text = format!("{}", value);
            prop_assert_eq!(parse_lab_value(&text), value);
        }

        /// Arbitrary form text evaluates without panicking.
        #[test]
        fn form_text_evaluates(a in form_text(), p in form_text(), c in form_text()) {
            let _ = evaluate(&LabInput::parse(&a, &p, &c));
        }
    }
}
