//! Proteinuria CLI - urine protein biomarker evaluation.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use proteinuria::EvaluationError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Evaluate {
            lab,
            format,
            raw_apr,
            json,
        } => commands::evaluate::run(lab, format.or_json(json), raw_apr, cli.verbose),

        Commands::Check { lab, format, json } => {
            commands::check::run(lab, format.or_json(json), cli.verbose)
        }

        Commands::Thresholds { format, json } => {
            commands::thresholds::run(format.or_json(json), cli.verbose)
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<EvaluationError>() {
            Some(EvaluationError::InvalidInput { errors }) => {
                for error in errors {
                    eprintln!("{} {}", "Error:".red().bold(), error.red());
                }
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
