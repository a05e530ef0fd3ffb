// ABOUTME: Command-line tool resolving a goal document into absolute goal equivalents
// ABOUTME: Reads JSON from a file or stdin and prints a JSON report or a text table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Resolve a document and print a table
//! goal-equivalents resolve diet.json
//!
//! # Read from stdin, print JSON, force kilojoules as the fallback energy unit
//! cat diet.json | goal-equivalents resolve - --format json --energy-unit kj
//!
//! # Print a sample document to start from
//! goal-equivalents sample
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use diet_goal_engine::config::EngineConfig;
use diet_goal_engine::document::GoalDocument;
use diet_goal_engine::logging::LoggingConfig;
use diet_goal_engine::models::{
    BodyMassType, BodyProfile, EnergyDelta, EnergyGoalKind, Goal, GoalType, Macro,
    MacroGoalKind, UserUnits,
};
use diet_goal_engine::units::{EnergyUnit, WeightUnit};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "goal-equivalents",
    about = "Resolve relative diet goals into absolute values",
    long_about = "Resolves energy, macro, and micronutrient goals expressed relative to maintenance, body mass, or the energy goal into absolute lower and upper values."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a goal document
    Resolve {
        /// Path to the JSON goal document, or `-` for stdin
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Fallback energy unit when the document has no user units
        #[arg(long)]
        energy_unit: Option<EnergyUnit>,

        /// Fallback weight unit when the document has no user units
        #[arg(long)]
        weight_unit: Option<WeightUnit>,
    },

    /// Print a sample goal document
    Sample,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Resolve {
            input,
            format,
            energy_unit,
            weight_unit,
        } => resolve(&input, format, energy_unit, weight_unit),
        Command::Sample => {
            println!("{}", serde_json::to_string_pretty(&sample_document())?);
            Ok(())
        }
    }
}

fn resolve(
    input: &Path,
    format: OutputFormat,
    energy_unit: Option<EnergyUnit>,
    weight_unit: Option<WeightUnit>,
) -> Result<()> {
    let config = EngineConfig::global();
    let document = if input.as_os_str() == "-" {
        GoalDocument::from_reader(io::stdin().lock())?
    } else {
        let file = File::open(input)
            .with_context(|| format!("failed to open {}", input.display()))?;
        GoalDocument::from_reader(BufReader::new(file))?
    };

    let mut default_units = config.default_units;
    if let Some(unit) = energy_unit {
        default_units.energy = unit;
    }
    if let Some(unit) = weight_unit {
        default_units.weight = unit;
    }

    info!(goal_count = document.goals.len(), "resolving goal document");
    let report = document.resolve(default_units);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print!("{}", report.to_table(config.table_precision)),
    }
    Ok(())
}

fn sample_document() -> GoalDocument {
    let energy = Goal::new(GoalType::Energy(EnergyGoalKind::FromMaintenance {
        unit: EnergyUnit::Kcal,
        delta: EnergyDelta::Deficit,
    }))
    .with_lower_bound(300.0)
    .with_upper_bound(500.0);

    let protein = Goal::new(GoalType::Macro {
        kind: MacroGoalKind::QuantityPerBodyMass {
            body_mass: BodyMassType::LeanMass,
            unit: WeightUnit::Kg,
        },
        nutrient: Macro::Protein,
    })
    .with_lower_bound(1.6)
    .with_upper_bound(2.2);

    let fat = Goal::new(GoalType::Macro {
        kind: MacroGoalKind::PercentageOfEnergy,
        nutrient: Macro::Fat,
    })
    .with_upper_bound(30.0);

    GoalDocument {
        goals: vec![energy, protein, fat],
        body_profile: Some(
            BodyProfile::new(1750.0, 650.0, EnergyUnit::Kcal)
                .with_weight(82.0, WeightUnit::Kg)
                .with_lean_mass(66.0),
        ),
        user_units: Some(UserUnits::default()),
    }
}
