//! Fallguard CLI - fuzzy-logic risk assessment for work at height
//!
//! This CLI lets safety officers:
//! - Assess the fall risk for a given set of measurements
//! - Run the preset example scenarios
//! - Inspect the linguistic categories behind each input

#![deny(unsafe_code)]

use clap::{Parser, Subcommand};
use fallguard_risk::Locale;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{assess, categories, scenario, Context};
use config::CliConfig;
use error::CliResult;
use output::print_error;

/// Fallguard CLI application
#[derive(Parser)]
#[command(name = "fallguard")]
#[command(about = "Fallguard - fuzzy-logic risk assessment for work at height", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FALLGUARD_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true)]
    output: Option<output::OutputFormat>,

    /// Label language (en, tr)
    #[arg(short, long, global = true, env = "FALLGUARD_LOCALE")]
    locale: Option<Locale>,

    /// Reject measurements outside their domain instead of clamping them
    #[arg(short, long, global = true)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Assess the risk for one set of measurements
    Assess(assess::AssessArgs),

    /// Preset example scenarios
    Scenario {
        #[command(subcommand)]
        command: scenario::ScenarioCommands,
    },

    /// List the categories of an input variable, or of the risk output
    #[command(alias = "cats")]
    Categories {
        /// wind, temperature, age, humidity, rainfall, health or risk
        target: categories::Target,
    },

    /// Show the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let assessor_config = config.assessor_config(cli.locale, cli.strict);
    let format = cli.output.or(config.output).unwrap_or_default();
    tracing::debug!(?assessor_config, ?format, "effective configuration");

    let ctx = Context::new(assessor_config, format);

    // Execute command
    match cli.command {
        Commands::Assess(args) => assess::execute(args, &ctx),
        Commands::Scenario { command } => scenario::execute(command, &ctx),
        Commands::Categories { target } => categories::execute(target, &ctx),
        Commands::Config => output::print_structured(
            &CliConfig {
                locale: Some(ctx.locale()),
                out_of_domain: Some(ctx.assessor.config().out_of_domain),
                output: Some(format),
            },
            format,
        ),
    }
}
