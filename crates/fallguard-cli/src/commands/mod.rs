//! CLI command implementations

pub mod assess;
pub mod categories;
pub mod scenario;

use chrono::{DateTime, Utc};
use fallguard_risk::{
    AssessorConfig, InputVariable, Locale, OutOfDomainPolicy, RiskAssessment, RiskAssessor,
    RiskInputs, RiskResult, VariableContribution,
};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{self, colorize_level, degree_bar, print_info, print_warning, OutputFormat};

/// Shared state for every command
pub struct Context {
    pub assessor: RiskAssessor,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: AssessorConfig, format: OutputFormat) -> Self {
        Self {
            assessor: RiskAssessor::new(config),
            format,
        }
    }

    pub fn locale(&self) -> Locale {
        self.assessor.config().locale
    }
}

/// Intermediate values, included with `--detailed`
#[derive(Debug, Serialize)]
pub struct Breakdown {
    pub contributions: Vec<VariableContribution>,
    pub aggregate_score: f64,
    pub adjusted_score: f64,
    pub harness_penalty_applied: bool,
}

/// One assessment as printed by the CLI
#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    pub assessed_at: DateTime<Utc>,
    pub locale: Locale,
    pub inputs: RiskInputs,
    #[serde(flatten)]
    pub result: RiskResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

/// Table row for membership display
#[derive(Debug, Tabled)]
struct MembershipRow {
    #[tabled(rename = "Risk level")]
    level: String,
    #[tabled(rename = "Degree")]
    degree: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Table row for per-variable breakdown
#[derive(Debug, Tabled)]
struct ContributionRow {
    #[tabled(rename = "Variable")]
    variable: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Defuzzified")]
    defuzzified: String,
    #[tabled(rename = "Normalized")]
    normalized: String,
    #[tabled(rename = "Dominant category")]
    category: String,
}

impl From<&VariableContribution> for ContributionRow {
    fn from(c: &VariableContribution) -> Self {
        Self {
            variable: c.variable.name().to_string(),
            value: format!("{} {}", c.value, short_unit(c.variable)),
            defuzzified: format!("{:.3}", c.defuzzified),
            normalized: format!("{:.3}", c.normalized),
            category: c.dominant_category.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

fn short_unit(variable: InputVariable) -> &'static str {
    match variable {
        InputVariable::Health => "",
        other => other.unit(),
    }
}

/// Run one assessment, warning about clamped measurements.
pub fn run_assessment(
    ctx: &Context,
    inputs: &RiskInputs,
    detailed: bool,
) -> CliResult<(AssessmentReport, RiskAssessment)> {
    if ctx.assessor.config().out_of_domain == OutOfDomainPolicy::Clamp {
        for variable in InputVariable::ALL {
            let value = inputs.value(variable);
            if value.is_finite() && !variable.contains(value) {
                let (min, max) = variable.bounds();
                tracing::warn!(%variable, value, min, max, "clamping out-of-domain value");
                print_warning(&format!(
                    "{} {} is outside [{}, {}]; using the boundary value",
                    variable, value, min, max
                ));
            }
        }
    }

    let assessment = ctx.assessor.assess_detailed(inputs)?;
    let breakdown = detailed.then(|| Breakdown {
        contributions: assessment.contributions.clone(),
        aggregate_score: assessment.aggregate_score,
        adjusted_score: assessment.adjusted_score,
        harness_penalty_applied: assessment.harness_penalty_applied,
    });
    let report = AssessmentReport {
        assessed_at: Utc::now(),
        locale: ctx.locale(),
        inputs: inputs.clone(),
        result: assessment.result.clone(),
        breakdown,
    };
    Ok((report, assessment))
}

/// Render an assessment in table form.
pub fn print_assessment_table(report: &AssessmentReport, assessment: &RiskAssessment) {
    let result = &report.result;
    print_info(&format!(
        "Risk: {} (score {:.3})",
        colorize_level(assessment.level, &result.label),
        result.score
    ));

    let rows = result
        .memberships
        .iter()
        .map(|(label, degree)| MembershipRow {
            level: label.to_string(),
            degree: format!("{:.3}", degree),
            bar: degree_bar(degree, 20),
        })
        .collect();
    output::print_table::<MembershipRow>(rows);

    if let Some(breakdown) = &report.breakdown {
        let rows = breakdown
            .contributions
            .iter()
            .map(ContributionRow::from)
            .collect();
        output::print_table::<ContributionRow>(rows);
        println!("Aggregate score: {:.4}", breakdown.aggregate_score);
        if breakdown.harness_penalty_applied {
            println!(
                "No harness: raised to {:.4} (x{}, capped at {})",
                breakdown.adjusted_score,
                fallguard_risk::HARNESS_PENALTY_MULTIPLIER,
                fallguard_risk::PENALTY_CAP
            );
        }
    }
}

/// Print one assessment in the selected format.
pub fn print_assessment(
    ctx: &Context,
    report: &AssessmentReport,
    assessment: &RiskAssessment,
) -> CliResult<()> {
    match ctx.format {
        OutputFormat::Table => {
            print_assessment_table(report, assessment);
            Ok(())
        }
        format => output::print_structured(report, format),
    }
}
