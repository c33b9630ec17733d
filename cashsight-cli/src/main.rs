//! Cashsight CLI - command-line interface for executive decision reports
//!
//! Presentation layer only: selects or loads one financial input, runs the
//! engine, and renders the report. No business logic lives here.

#![deny(warnings)]

use anyhow::Context;
use cashsight_core::{evaluate, render_json, render_text, RawFinancialInput};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cashsight")]
#[command(about = "Financial health diagnosis and executive decision reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one financial input and render the executive report
    Evaluate {
        /// Named preset scenario (see `cashsight scenarios`)
        #[arg(long, conflicts_with = "input")]
        scenario: Option<String>,

        /// Path to a JSON file holding the four input fields
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// List the preset scenarios
    Scenarios,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Preset scenarios: name, description, input. Fixture data for the
/// presentation layer, not engine state.
const SCENARIOS: [(&str, &str, [f64; 4]); 4] = [
    (
        "healthy",
        "Strong collections, costs under control",
        [100_000.0, 95_000.0, 60_000.0, 0.05],
    ),
    (
        "liquidity-crunch",
        "Profitable on paper but burning cash",
        [100_000.0, 20_000.0, 60_000.0, 0.45],
    ),
    (
        "collections-lag",
        "Sound margins undermined by late payers",
        [120_000.0, 90_000.0, 50_000.0, 0.55],
    ),
    (
        "margin-squeeze",
        "Expenses outrun credit sales",
        [50_000.0, 60_000.0, 80_000.0, 0.10],
    ),
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            scenario,
            input,
            format,
        } => {
            let raw = match (scenario, input) {
                (Some(name), None) => preset_input(&name)?,
                (None, Some(path)) => load_input(&path)?,
                (None, None) => {
                    anyhow::bail!("specify either --scenario <name> or --input <path>")
                }
                // conflicts_with rejects this earlier; keep the match total
                (Some(_), Some(_)) => {
                    anyhow::bail!("--scenario and --input are mutually exclusive")
                }
            };

            let report = match evaluate(&raw) {
                Ok(report) => report,
                Err(e) => anyhow::bail!("invalid input: {}", e),
            };

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&report));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&report));
                }
            }
        }
        Commands::Scenarios => {
            for (name, description, _) in SCENARIOS {
                println!("{:<18} {}", name, description);
            }
        }
    }

    Ok(())
}

/// Resolve a preset scenario by name
fn preset_input(name: &str) -> anyhow::Result<RawFinancialInput> {
    SCENARIOS
        .iter()
        .find(|(scenario_name, _, _)| *scenario_name == name)
        .map(|&(_, _, [sales, cash, expenses, late_ratio])| {
            RawFinancialInput::complete(sales, cash, expenses, late_ratio)
        })
        .ok_or_else(|| {
            let known = SCENARIOS
                .iter()
                .map(|(n, _, _)| *n)
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::anyhow!("unknown scenario '{}' (known: {})", name, known)
        })
}

/// Load a raw input from a JSON file
fn load_input(path: &PathBuf) -> anyhow::Result<RawFinancialInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse input file: {}", path.display()))
}
