//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Proteinuria: urine albumin/protein biomarker evaluation
#[derive(Parser)]
#[command(name = "proteinuria")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute ratios, categories and clinical conclusions
    Evaluate {
        #[command(flatten)]
        lab: LabArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Classify APR at full precision instead of the two-decimal value
        #[arg(long)]
        raw_apr: bool,

        /// Output as JSON (same as --format json)
        #[arg(long)]
        json: bool,
    },

    /// Validate lab values without computing anything
    Check {
        #[command(flatten)]
        lab: LabArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output as JSON (same as --format json)
        #[arg(long)]
        json: bool,
    },

    /// Show the category thresholds for each ratio
    Thresholds {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output as JSON (same as --format json)
        #[arg(long)]
        json: bool,
    },
}

/// Lab values, as typed into a form or read from a JSON file.
///
/// Values are taken as text so that non-numeric entries are reported as
/// validation errors rather than argument errors.
#[derive(Args, Debug, Clone)]
pub struct LabArgs {
    /// Urine albumin (mg/L)
    #[arg(short, long, allow_hyphen_values = true)]
    pub albumin: Option<String>,

    /// Urine total protein (mg/L)
    #[arg(short, long, allow_hyphen_values = true)]
    pub protein: Option<String>,

    /// Urine creatinine (mg/L)
    #[arg(short, long, allow_hyphen_values = true)]
    pub creatinine: Option<String>,

    /// JSON file with albumin, protein and creatinine fields
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["albumin", "protein", "creatinine"])]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Apply the `--json` shorthand.
    pub fn or_json(self, json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            self
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
