mod cli;
mod config;
mod error;
mod output;

use std::{error::Error as _, process::ExitCode};

use bmi_core::{BmiModel, Category, Model, render, visibility_for};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Command, ComputeArgs},
    config::Config,
    error::CliError,
    output::Format,
};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Compute(args) => compute(&args, config),
        Command::Fields { units } => {
            let units = units.unwrap_or(config.units);
            println!("{}", serde_json::to_string_pretty(&visibility_for(units))?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("{category}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn compute(args: &ComputeArgs, config: Config) -> Result<ExitCode, CliError> {
    let input = args.to_input(config.units);
    let format = args.format.unwrap_or(config.format);
    tracing::debug!(units = %input.units, ?format, "computing BMI");

    let result = BmiModel.call(input);
    let code = match &result {
        Ok(explanation) => {
            tracing::info!(
                bmi = explanation.bmi,
                category = explanation.category.label(),
                "computed BMI"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::warn!(field = %err.field(), kind = err.kind(), "input rejected");
            ExitCode::from(1)
        }
    };

    match format {
        Format::Markdown => println!("{}", result?),
        Format::Json => println!("{}", output::to_json(&result)?),
        Format::Text => println!("{}", render(&result)),
    }
    Ok(code)
}
