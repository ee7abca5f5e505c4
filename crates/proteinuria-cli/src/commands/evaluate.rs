//! Evaluate command - compute ratios, categories and conclusions.

use colored::Colorize;
use proteinuria::{AprPrecision, EvaluationReport, Evaluator, EvaluatorConfig};

use crate::cli::{LabArgs, OutputFormat};

pub fn run(
    lab: LabArgs,
    format: OutputFormat,
    raw_apr: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::load_input(&lab)?;

    let precision = if raw_apr {
        AprPrecision::Raw
    } else {
        AprPrecision::Rounded
    };
    let evaluator =
        Evaluator::with_config(EvaluatorConfig::default().with_apr_precision(precision));
    let outcome = evaluator.evaluate(&input);

    match format {
        OutputFormat::Json => println!("{}", render_json(&outcome)?),
        OutputFormat::Text => {
            if let Ok(report) = &outcome {
                print_report(report, verbose);
            }
        }
    }

    // Validation errors are printed by main, which then exits with status 1.
    outcome?;
    Ok(())
}

/// JSON document for an evaluation: the report, or `{"errors": [...]}`.
pub fn render_json(
    outcome: &proteinuria::Result<EvaluationReport>,
) -> serde_json::Result<String> {
    match outcome {
        Ok(report) => serde_json::to_string_pretty(report),
        Err(e) => {
            let errors = match e.validation_errors() {
                Some(errors) => errors.to_vec(),
                None => vec![e.to_string()],
            };
            serde_json::to_string_pretty(&serde_json::json!({ "errors": errors }))
        }
    }
}

fn print_report(report: &EvaluationReport, verbose: bool) {
    for warning in &report.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }
    if report.has_warnings() {
        println!();
    }

    if verbose {
        println!(
            "{} albumin={} protein={} creatinine={} (mg/L)",
            "Input:".cyan().bold(),
            report.input.albumin,
            report.input.protein,
            report.input.creatinine
        );
        println!();
    }

    let d = &report.display;
    print_section("Calculated ACR:", &d.acr, &d.acr_category);
    print_section("Calculated PCR:", &d.pcr, &d.pcr_category);
    print_section("Albumin fraction (APR):", &d.apr, &d.apr_category);
    print_section("Non-albumin proteinuria (NAP):", &d.nap, &d.nap_category);

    println!("{}", "Clinical Conclusions:".cyan().bold());
    for conclusion in &report.conclusions {
        println!("  - {}", conclusion);
    }
}

fn print_section(title: &str, value: &str, category: &str) {
    println!("{} {}", title.white().bold(), value);
    println!("{} {}", "Category:".white().bold(), category);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proteinuria::validation::ALBUMIN_EXCEEDS_PROTEIN_MESSAGE;
    use proteinuria::{evaluate, EvaluationError, LabInput};

    fn lab(albumin: &str, protein: &str, creatinine: &str) -> LabArgs {
        LabArgs {
            albumin: Some(albumin.to_string()),
            protein: Some(protein.to_string()),
            creatinine: Some(creatinine.to_string()),
            input: None,
        }
    }

    #[test]
    fn test_invalid_input_renders_error_list() {
        let outcome = evaluate(&LabInput::new(100.0, 50.0, 1000.0));
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome).unwrap()).unwrap();

        assert_eq!(json, serde_json::json!({ "errors": [ALBUMIN_EXCEEDS_PROTEIN_MESSAGE] }));
    }

    #[test]
    fn test_valid_input_renders_report() {
        let outcome = evaluate(&LabInput::new(30.0, 4000.0, 1000.0));
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome).unwrap()).unwrap();

        assert_eq!(json["categories"]["pcr"], "nephrotic");
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_invalid_input_fails_command() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let err = run(lab("100", "50", "1000"), format, false, false).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<EvaluationError>(),
                Some(EvaluationError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_valid_input_succeeds() {
        assert!(run(lab("30", "4000", "1000"), OutputFormat::Json, true, false).is_ok());
    }
}
