//! Thresholds command - print the category reference table.

use colored::Colorize;
use proteinuria::classify::thresholds;

use crate::cli::OutputFormat;

pub fn run(format: OutputFormat, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows = thresholds();

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut current = "";
    for row in &rows {
        if row.metric != current {
            if !current.is_empty() {
                println!();
            }
            println!("{}", row.metric.yellow().bold());
            current = row.metric;
        }
        println!("  {:14} {}", row.range, row.category);
    }

    Ok(())
}
