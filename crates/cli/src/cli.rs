use std::path::PathBuf;

use bmi_core::{RawInput, UnitSystem};
use clap::{Args, Parser, Subcommand};

use crate::output::Format;

#[derive(Debug, Parser)]
#[command(name = "bmi", version)]
#[command(about = "Body Mass Index calculator", long_about = None)]
pub struct Cli {
    /// TOML file with default `units` and `format`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute and classify a BMI
    Compute(ComputeArgs),

    /// Show which height fields apply to a unit system
    Fields {
        /// Unit system (metric or imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,
    },

    /// List the classification bands
    Categories,
}

/// Raw measurement fields, passed through unparsed so the engine reports
/// invalid numbers.
#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Unit system (metric or imperial)
    #[arg(short, long)]
    pub units: Option<UnitSystem>,

    /// Weight in kilograms (metric) or pounds (imperial)
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Height in centimeters, for metric
    #[arg(long, allow_hyphen_values = true)]
    pub height_cm: Option<String>,

    /// Height in whole feet, for imperial
    #[arg(long, allow_hyphen_values = true)]
    pub height_ft: Option<String>,

    /// Remaining height in inches, for imperial
    #[arg(long, allow_hyphen_values = true)]
    pub height_in: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

impl ComputeArgs {
    /// Builds raw input, falling back to `default_units` if none was given.
    pub fn to_input(&self, default_units: UnitSystem) -> RawInput {
        RawInput::new(
            self.units.unwrap_or(default_units),
            self.weight.clone(),
            self.height_cm.clone(),
            self.height_ft.clone(),
            self.height_in.clone(),
        )
    }
}
