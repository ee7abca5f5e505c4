//! Check command - validate lab values only.

use colored::Colorize;
use proteinuria::{EvaluationError, Evaluator};

use crate::cli::{LabArgs, OutputFormat};

pub fn run(
    lab: LabArgs,
    format: OutputFormat,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::load_input(&lab)?;
    let result = Evaluator::new().validate(&input);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            for warning in &result.warnings {
                println!(
                    "{} {} {}",
                    format!("{}:", warning.severity.label()).yellow().bold(),
                    format!("[{}]", warning.kind.label()).dimmed(),
                    warning.message.yellow()
                );
            }
            if result.is_valid() {
                println!("{}", "Input is valid.".green().bold());
            }
        }
    }

    if !result.is_valid() {
        return Err(EvaluationError::InvalidInput {
            errors: result.error_messages(),
        }
        .into());
    }

    Ok(())
}
