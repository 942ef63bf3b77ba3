//! Category introspection

use fallguard_risk::{CategoryInfo, InputVariable, RiskLevel};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::error::CliResult;
use crate::output::{self, print_info, OutputFormat};

/// Target of `fallguard categories`: an input variable or the risk output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Input(InputVariable),
    Risk,
}

impl std::str::FromStr for Target {
    type Err = fallguard_risk::RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("risk") {
            Ok(Target::Risk)
        } else {
            s.parse().map(Target::Input)
        }
    }
}

/// Table row for category display
#[derive(Debug, Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Shape")]
    shape: String,
    #[tabled(rename = "Peak")]
    peak: String,
    #[tabled(rename = "Height")]
    height: String,
}

impl From<&CategoryInfo> for CategoryRow {
    fn from(info: &CategoryInfo) -> Self {
        Self {
            id: info.id,
            label: info.label,
            shape: info.shape.to_string(),
            peak: format!("{}", round4(info.peak)),
            height: format!("{:.2}", info.height),
        }
    }
}

fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

/// Categories of one variable, for structured output
#[derive(Debug, Serialize)]
struct VariableReport {
    variable: &'static str,
    name: &'static str,
    unit: &'static str,
    min: f64,
    max: f64,
    step: f64,
    categories: Vec<CategoryInfo>,
}

/// Execute the categories command
pub fn execute(target: Target, ctx: &Context) -> CliResult<()> {
    let report = match target {
        Target::Input(variable) => {
            let (min, max) = variable.bounds();
            VariableReport {
                variable: variable.id(),
                name: variable.name(),
                unit: variable.unit(),
                min,
                max,
                step: variable.step(),
                categories: variable.categories(ctx.locale())?,
            }
        }
        Target::Risk => {
            let (min, max, step) = fallguard_risk::classifier::RISK_UNIVERSE;
            VariableReport {
                variable: "risk",
                name: "Risk",
                unit: "score",
                min,
                max,
                step,
                categories: RiskLevel::categories(ctx.locale())?,
            }
        }
    };

    match ctx.format {
        OutputFormat::Table => {
            print_info(&format!(
                "{} ({}), universe [{}, {}] step {}",
                report.name, report.unit, report.min, report.max, report.step
            ));
            output::print_table(report.categories.iter().map(CategoryRow::from).collect());
            Ok(())
        }
        format => output::print_structured(&report, format),
    }
}
