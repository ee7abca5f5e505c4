//! Example: Evaluate one set of urine lab values.
//!
//! Usage:
//!   cargo run --example evaluate -- <albumin> <protein> <creatinine>
//!
//! Example:
//!   cargo run --example evaluate -- 30 4000 1000

use std::env;

use proteinuria::{EvaluationError, Evaluator, LabInput};

fn main() -> proteinuria::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: cargo run --example evaluate -- <albumin> <protein> <creatinine>");
        eprintln!("\nAll values in mg/L. Example:");
        eprintln!("  cargo run --example evaluate -- 30 4000 1000");
        std::process::exit(1);
    }

    let input = LabInput::parse(&args[1], &args[2], &args[3]);

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!(
        "Urine protein evaluation: albumin={} protein={} creatinine={}",
        args[1], args[2], args[3]
    );
    println!("{}", separator);
    println!();

    let report = match Evaluator::new().evaluate(&input) {
        Ok(report) => report,
        Err(EvaluationError::InvalidInput { errors }) => {
            println!("## Errors");
            for error in &errors {
                println!("  {}", error);
            }
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    if report.has_warnings() {
        println!("## Warnings");
        for warning in &report.warnings {
            println!("  {}", warning);
        }
        println!();
    }

    let d = &report.display;
    println!("## Metrics");
    println!("  ACR: {:14} {}", d.acr, d.acr_category);
    println!("  PCR: {:14} {}", d.pcr, d.pcr_category);
    println!("  APR: {:14} {}", d.apr, d.apr_category);
    println!("  NAP: {:14} {}", d.nap, d.nap_category);
    println!();

    println!("## Clinical Conclusions");
    for conclusion in &report.conclusions {
        println!("  - {}", conclusion);
    }

    Ok(())
}
