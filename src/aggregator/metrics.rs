//! Summary statistics over repeated runs and per-module rankings.
//!
//! Import time is noisy (disk cache, CPU frequency, background load), so a
//! check is usually repeated and judged on the median total. Per-module
//! rankings always come from a single representative run.

use crate::parser::schema::TimingRecord;
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Robust summary of repeated total-time measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Median total in microseconds (floor of the two middle values for even counts)
    pub median_us: u64,

    /// Fastest run in microseconds
    pub min_us: u64,
}

impl RunSummary {
    pub fn median_ms(&self) -> f64 {
        self.median_us as f64 / 1000.0
    }

    pub fn min_ms(&self) -> f64 {
        self.min_us as f64 / 1000.0
    }
}

/// Aggregate the totals of repeated runs
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `totals` - One total per run, in microseconds
///
/// # Errors
/// * `AggregateError::NoMeasurements` - `totals` is empty. Callers must
///   measure at least once; this is a contract violation, not bad data.
pub fn aggregate(totals: &[u64]) -> Result<RunSummary, AggregateError> {
    if totals.is_empty() {
        return Err(AggregateError::NoMeasurements);
    }

    let mut sorted = totals.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let median_us = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        let (low, high) = (sorted[n / 2 - 1], sorted[n / 2]);
        // Floor of the mean without overflowing on huge values
        low / 2 + high / 2 + (low % 2 + high % 2) / 2
    };
    let min_us = sorted[0];

    debug!("Aggregated {} runs: median {}us, min {}us", n, median_us, min_us);

    Ok(RunSummary { median_us, min_us })
}

/// The `n` slowest imports by self time
///
/// **Public** - used for report rendering
///
/// Ties keep their original trace order.
pub fn top_imports(records: &[TimingRecord], n: usize) -> Vec<&TimingRecord> {
    let mut ranked: Vec<&TimingRecord> = records.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.self_time_us.cmp(&a.self_time_us));
    ranked.truncate(n);
    ranked
}
