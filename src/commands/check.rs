//! Check command implementation.
//!
//! The check command:
//! 1. Measures the import (one or more runs)
//! 2. Parses and aggregates the traces
//! 3. Evaluates the budget and ban list
//! 4. Prints the summary or JSON report
//! 5. Writes optional report and flamegraph files

use super::models::CheckArgs;
use crate::aggregator::build_collapsed_stacks;
use crate::flamegraph::generate_flamegraph;
use crate::guard::{check_import, CheckOptions, CheckResult};
use crate::output::{render_summary, render_violations, report_to_string, to_report, write_report, write_svg};
use crate::runner::{validate_module_name, ImportTimer};
use crate::utils::config::{MAX_REPEAT, MAX_TOP_IMPORTS};
use crate::utils::FlamegraphError;
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the check command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Check command arguments
/// * `timer` - Measurement backend (a `PythonRunner` outside of tests)
///
/// # Returns
/// The check result. The caller decides the exit status from `passed()`.
///
/// # Errors
/// * Interpreter spawn failures
/// * File write errors
pub fn execute_check(args: &CheckArgs, timer: &dyn ImportTimer) -> Result<CheckResult> {
    let start_time = Instant::now();

    let options = CheckOptions::new(args.module.clone())
        .with_banned(args.banned.iter().cloned())
        .with_repeat(args.repeat);
    let options = match args.max_ms {
        Some(max_ms) => options.with_max_ms(max_ms),
        None => options,
    };

    let result = check_import(timer, &options)
        .with_context(|| format!("Failed to check import of {}", args.module))?;

    if result.representative_trace.is_empty() {
        warn!("No timings captured for {}; check that it is importable", args.module);
    }

    print_result(args, &result)?;

    if let Some(path) = &args.output_json {
        let report = to_report(&result, args.top);
        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    if let Some(path) = &args.output_svg {
        let stacks = build_collapsed_stacks(&result.representative_trace);
        match generate_flamegraph(&stacks, args.flamegraph_config.as_ref()) {
            Ok(svg) => {
                write_svg(&svg, path).context("Failed to write flamegraph SVG")?;
                info!("✓ Flamegraph written to: {}", path.display());
            }
            // Nothing measurable to draw; the check result still stands
            Err(FlamegraphError::EmptyStacks) => {
                warn!("No import time to plot for {}; skipping flamegraph", args.module);
            }
            Err(e) => return Err(e).context("Failed to generate flamegraph"),
        }
    }

    info!("Check completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(result)
}

/// Print the result in the requested format
///
/// **Private** - internal helper for execute_check
fn print_result(args: &CheckArgs, result: &CheckResult) -> Result<()> {
    if args.json {
        let report = to_report(result, args.top);
        println!("{}", report_to_string(&report).context("Failed to serialize report")?);
    } else if args.quiet {
        for line in render_violations(result) {
            println!("{}", line);
        }
    } else {
        println!("{}", render_summary(result, args.top));
    }
    Ok(())
}

/// Validate check arguments
///
/// **Public** - can be called before execute_check for early validation
pub fn validate_args(args: &CheckArgs) -> Result<()> {
    validate_module_name(&args.module)?;

    if let Some(max_ms) = args.max_ms {
        if !max_ms.is_finite() || max_ms < 0.0 {
            anyhow::bail!("max_ms must be a non-negative number");
        }
    }

    for banned in &args.banned {
        validate_module_name(banned).context("Invalid banned module")?;
    }

    if args.repeat == 0 {
        anyhow::bail!("repeat must be greater than 0");
    }

    if args.repeat > MAX_REPEAT {
        anyhow::bail!("repeat is too large (max {})", MAX_REPEAT);
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_TOP_IMPORTS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_IMPORTS);
    }

    if args.python.trim().is_empty() {
        anyhow::bail!("Python interpreter path cannot be empty");
    }

    Ok(())
}
