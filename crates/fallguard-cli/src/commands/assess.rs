//! Ad-hoc risk assessment

use clap::Args;
use fallguard_risk::RiskInputs;

use super::{print_assessment, run_assessment, Context};
use crate::error::CliResult;

/// Measurements for `fallguard assess`; omitted values use the custom defaults
#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Wind speed in km/h (0-80)
    #[arg(short, long)]
    pub wind: Option<f64>,

    /// Air temperature in °C (-40-60)
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Worker age in years (13-100)
    #[arg(short, long)]
    pub age: Option<f64>,

    /// Relative humidity in % (0-100)
    #[arg(short = 'u', long)]
    pub humidity: Option<f64>,

    /// Rainfall in mm (0-150)
    #[arg(short, long)]
    pub rainfall: Option<f64>,

    /// Health condition, 0 (healthy) to 5 (critical)
    #[arg(short = 'H', long)]
    pub health: Option<f64>,

    /// The worker wears a fall-protection harness
    #[arg(long, overrides_with = "no_harness")]
    pub harness: bool,

    /// The worker has no fall protection (default)
    #[arg(long = "no-harness", overrides_with = "harness")]
    pub no_harness: bool,

    /// Include per-variable intermediate values
    #[arg(short, long)]
    pub detailed: bool,
}

impl AssessArgs {
    /// Merge the given measurements over the custom defaults
    pub fn to_inputs(&self) -> RiskInputs {
        let defaults = RiskInputs::default();
        let harness_equipped = if self.harness {
            true
        } else if self.no_harness {
            false
        } else {
            defaults.harness_equipped
        };
        RiskInputs {
            wind: self.wind.unwrap_or(defaults.wind),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            age: self.age.unwrap_or(defaults.age),
            humidity: self.humidity.unwrap_or(defaults.humidity),
            rainfall: self.rainfall.unwrap_or(defaults.rainfall),
            health: self.health.unwrap_or(defaults.health),
            harness_equipped,
        }
    }
}

/// Execute the assess command
pub fn execute(args: AssessArgs, ctx: &Context) -> CliResult<()> {
    let inputs = args.to_inputs();
    tracing::debug!(?inputs, "assessing");
    let (report, assessment) = run_assessment(ctx, &inputs, args.detailed)?;
    print_assessment(ctx, &report, &assessment)
}
