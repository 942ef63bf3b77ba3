//! Preset scenario commands

use clap::Subcommand;
use fallguard_risk::Scenario;
use serde::Serialize;
use tabled::Tabled;

use super::{print_assessment_table, run_assessment, AssessmentReport, Context};
use crate::error::{CliError, CliResult};
use crate::output::{self, print_info, OutputFormat};

/// Scenario subcommands
#[derive(Debug, Subcommand)]
pub enum ScenarioCommands {
    /// List the preset scenarios
    List,

    /// Assess one preset, or all of them
    Run {
        /// Scenario ID
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<u8>,

        /// Run every preset
        #[arg(long)]
        all: bool,

        /// Include per-variable intermediate values
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Table row for scenario listing
#[derive(Debug, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "ID")]
    id: u8,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Wind")]
    wind: f64,
    #[tabled(rename = "Temp")]
    temperature: f64,
    #[tabled(rename = "Age")]
    age: f64,
    #[tabled(rename = "Humidity")]
    humidity: f64,
    #[tabled(rename = "Rain")]
    rainfall: f64,
    #[tabled(rename = "Health")]
    health: f64,
    #[tabled(rename = "Harness")]
    harness: &'static str,
}

impl From<&Scenario> for ScenarioRow {
    fn from(s: &Scenario) -> Self {
        let i = &s.inputs;
        Self {
            id: s.id,
            name: s.name,
            wind: i.wind,
            temperature: i.temperature,
            age: i.age,
            humidity: i.humidity,
            rainfall: i.rainfall,
            health: i.health,
            harness: if i.harness_equipped { "yes" } else { "no" },
        }
    }
}

/// Table row for a batch run
#[derive(Debug, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "ID")]
    id: u8,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Risk")]
    label: String,
}

/// A scenario with its assessment
#[derive(Debug, Serialize)]
struct ScenarioReport {
    id: u8,
    name: &'static str,
    #[serde(flatten)]
    report: AssessmentReport,
}

/// Execute a scenario command
pub fn execute(command: ScenarioCommands, ctx: &Context) -> CliResult<()> {
    match command {
        ScenarioCommands::List => {
            let scenarios = Scenario::all();
            match ctx.format {
                OutputFormat::Table => {
                    output::print_table(scenarios.iter().map(ScenarioRow::from).collect());
                    Ok(())
                }
                format => output::print_structured(&scenarios, format),
            }
        }

        ScenarioCommands::Run {
            all: true,
            detailed,
            ..
        } => run_all(ctx, detailed),

        ScenarioCommands::Run {
            id: Some(id),
            detailed,
            ..
        } => run_one(ctx, id, detailed),

        ScenarioCommands::Run { id: None, .. } => Err(CliError::InvalidInput(
            "a scenario ID or --all is required".into(),
        )),
    }
}

fn run_one(ctx: &Context, id: u8, detailed: bool) -> CliResult<()> {
    let scenario = Scenario::by_id(id)?;
    tracing::info!(scenario = id, "running scenario");
    let (report, assessment) = run_assessment(ctx, &scenario.inputs, detailed)?;

    match ctx.format {
        OutputFormat::Table => {
            print_info(&format!("Scenario {}: {}", scenario.id, scenario.name));
            print_assessment_table(&report, &assessment);
            Ok(())
        }
        format => output::print_structured(
            &ScenarioReport {
                id: scenario.id,
                name: scenario.name,
                report,
            },
            format,
        ),
    }
}

fn run_all(ctx: &Context, detailed: bool) -> CliResult<()> {
    let mut reports = Vec::new();
    for scenario in Scenario::all() {
        tracing::info!(scenario = scenario.id, "running scenario");
        let (report, _) = run_assessment(ctx, &scenario.inputs, detailed)?;
        reports.push(ScenarioReport {
            id: scenario.id,
            name: scenario.name,
            report,
        });
    }

    match ctx.format {
        OutputFormat::Table => {
            let rows = reports
                .iter()
                .map(|r| OutcomeRow {
                    id: r.id,
                    name: r.name,
                    score: format!("{:.3}", r.report.result.score),
                    label: r.report.result.label.clone(),
                })
                .collect();
            output::print_table::<OutcomeRow>(rows);
            Ok(())
        }
        format => output::print_structured(&reports, format),
    }
}
