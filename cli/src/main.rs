//! fitplan - generate nutrition and training plans from survey answers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitplan_cli::config::{AppConfig, LoggingConfig};
use fitplan_cli::export::{self, ExportFormat, TextOptions};
use fitplan_cli::read_survey;
use fitplan_engine::{bmi_snapshot, compose_plan, validate_survey};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(author, version, about = "Generate a fitness plan from survey answers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan from a survey JSON file
    Generate {
        /// Survey JSON file ("-" reads stdin)
        input: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a survey JSON file without generating anything
    Validate {
        /// Survey JSON file ("-" reads stdin)
        input: PathBuf,
    },

    /// Show BMI and healthy weight range
    Bmi {
        /// Weight in kg
        #[arg(short, long)]
        weight: f64,

        /// Height in cm
        #[arg(short = 'H', long)]
        height: f64,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            format,
            output,
        } => {
            let survey = read_survey(&input)?;
            if let Err(errors) = validate_survey(&survey) {
                for err in &errors {
                    error!(field = %err.field, "{}", err.message);
                    eprintln!("{}", err.user_message());
                }
                anyhow::bail!("Survey has {} invalid field(s)", errors.len());
            }

            let reference = config.reference_data()?;
            let plan = compose_plan(&survey, &reference);

            let format = format.unwrap_or(config.export.format);
            let options = TextOptions {
                lines_per_page: config.export.lines_per_page,
                include_food_bank: config.export.include_food_bank,
            };
            let rendered = export::render(&plan, format, options)?;

            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), ?format, "Plan written");
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Validate { input } => {
            let survey = read_survey(&input)?;
            match validate_survey(&survey) {
                Ok(()) => println!("Survey is valid"),
                Err(errors) => {
                    for err in &errors {
                        println!("{}", err.user_message());
                    }
                    anyhow::bail!("Survey has {} invalid field(s)", errors.len());
                }
            }
        }

        Commands::Bmi { weight, height } => {
            let snapshot = bmi_snapshot(weight, height);
            println!("BMI: {:.1} ({})", snapshot.bmi, snapshot.band.description());
            println!(
                "Healthy weight range: {:.1} - {:.1} kg",
                snapshot.healthy_weight_range.min_kg, snapshot.healthy_weight_range.max_kg
            );
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.clone().into());

    // Logs go to stderr so stdout stays clean for the rendered plan
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json || AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
