//! importguard CLI
//!
//! Measures Python import time and enforces import policies.
//! Exits with status 1 when any violation is found.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use importguard::commands::{
    display_schema, display_version, execute_check, validate_args, validate_report_file, CheckArgs,
};
use importguard::flamegraph::FlamegraphConfig;
use importguard::runner::PythonRunner;
use importguard::utils::config::{load_config, GuardConfig, PYTHON_ENV_VAR};

/// importguard - Python import time budgets and banned imports
#[derive(Parser, Debug)]
#[command(name = "importguard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute; help is printed when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Measure a module's import time and check it against policies
    Check {
        /// Module to import (e.g. "json" or "mypackage.sub")
        module: String,

        /// Maximum allowed import time in milliseconds
        #[arg(long)]
        max_ms: Option<f64>,

        /// Module that must not be imported (repeatable)
        #[arg(long = "ban", value_name = "MODULE")]
        banned: Vec<String>,

        /// Number of slowest imports to show
        #[arg(long)]
        top: Option<usize>,

        /// Number of measurement runs; the median is checked
        #[arg(long)]
        repeat: Option<usize>,

        /// Python interpreter to run
        #[arg(long, env = PYTHON_ENV_VAR)]
        python: Option<String>,

        /// TOML policy file (max_ms, banned, repeat, python, top)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the JSON report instead of the text summary
        #[arg(long)]
        json: bool,

        /// Only print violations
        #[arg(short, long, conflicts_with = "json")]
        quiet: bool,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write an SVG flamegraph of the import tree
        #[arg(short, long)]
        flamegraph: Option<PathBuf>,

        /// Flamegraph title
        #[arg(long)]
        title: Option<String>,

        /// Flamegraph width in pixels
        #[arg(long, default_value = "1200")]
        width: usize,
    },

    /// Validate a JSON report file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Check {
            module,
            max_ms,
            banned,
            top,
            repeat,
            python,
            config,
            json,
            quiet,
            output,
            flamegraph,
            title,
            width,
        } => {
            let policy = match &config {
                Some(path) => load_config(path)
                    .with_context(|| format!("Failed to load policy file {}", path.display()))?,
                None => GuardConfig::default(),
            };

            let flamegraph_config = flamegraph.as_ref().map(|_| {
                FlamegraphConfig::new()
                    .with_title(title.unwrap_or_else(|| format!("import {}", module)))
                    .with_width(width)
            });

            let args = CheckArgs {
                module,
                max_ms,
                banned,
                json,
                quiet,
                output_json: output,
                output_svg: flamegraph,
                flamegraph_config,
                ..Default::default()
            }
            .apply_config(policy, repeat, top, python);

            // Validate args first
            validate_args(&args)?;

            let runner = PythonRunner::new(args.python.clone());
            let result = execute_check(&args, &runner)?;

            if !result.passed() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(ExitCode::SUCCESS)
}
