//! The import check: measure, aggregate, evaluate.

use super::measurement::MeasurementSet;
use super::result::{CheckOptions, CheckResult};
use crate::runner::ImportTimer;
use crate::utils::error::GuardError;
use crate::violations::engine::evaluate;
use log::{debug, info};

/// Run an import check
///
/// **Public** - main library entry point
///
/// # Arguments
/// * `timer` - Supplies one raw trace per run
/// * `options` - Module, policies and repetition count
///
/// # Returns
/// The check result. Policy violations are part of the result; they never
/// make this function fail.
///
/// # Errors
/// * `GuardError::InvalidOptions` - `repeat` is zero
/// * `GuardError::Runner` - the timer could not produce a trace
///
/// # Example
/// ```ignore
/// let options = CheckOptions::new("json").with_max_ms(50.0).with_repeat(5);
/// let result = check_import(&PythonRunner::default(), &options)?;
/// assert!(result.passed());
/// ```
pub fn check_import(
    timer: &dyn ImportTimer,
    options: &CheckOptions,
) -> Result<CheckResult, GuardError> {
    if options.repeat == 0 {
        return Err(GuardError::InvalidOptions(
            "repeat must be at least 1".to_string(),
        ));
    }

    info!("Measuring import of {} ({} runs)", options.module, options.repeat);

    let raw_traces = timer.collect_traces(&options.module, options.repeat)?;

    let measurements = MeasurementSet::from_raw_traces(options.module.clone(), &raw_traces);
    debug!("Run totals for {}: {:?}", options.module, measurements.runs);

    let summary = measurements.summary()?;

    let evaluation = evaluate(
        &options.module,
        &measurements.representative_trace,
        summary.median_us,
        options.max_ms,
        &options.banned,
    );

    info!(
        "{} imported in {:.2}ms (median of {}), {} violations",
        options.module,
        summary.median_ms(),
        measurements.runs.len(),
        evaluation.violations.len()
    );

    let MeasurementSet {
        module,
        runs,
        representative_trace,
    } = measurements;

    Ok(CheckResult {
        module,
        runs,
        median_us: summary.median_us,
        min_us: summary.min_us,
        representative_trace,
        violations: evaluation.violations,
        banned_found: evaluation.banned_found,
    })
}
