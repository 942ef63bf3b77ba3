//! Output formatting utilities

use colored::*;
use fallguard_risk::RiskLevel;
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a table of rows; only called for [`OutputFormat::Table`]
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a single item as JSON or YAML
pub fn print_structured<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Colour a risk label by severity
pub fn colorize_level(level: RiskLevel, label: &str) -> ColoredString {
    match level {
        RiskLevel::VeryLow => label.green(),
        RiskLevel::Low => label.bright_green(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::High => label.bright_red(),
        RiskLevel::VeryHigh => label.red().bold(),
    }
}

/// Text bar of `width` cells for a degree in `[0, 1]`
pub fn degree_bar(degree: f64, width: usize) -> String {
    let filled = (degree.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert!(matches!(format, OutputFormat::Table));
    }

    #[test]
    fn test_degree_bar() {
        assert_eq!(degree_bar(0.0, 4), "····");
        assert_eq!(degree_bar(0.5, 4), "██··");
        assert_eq!(degree_bar(1.0, 4), "████");
        assert_eq!(degree_bar(2.0, 4), "████");
    }
}
