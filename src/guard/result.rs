//! Check inputs and results.

use crate::aggregator::metrics::top_imports;
use crate::parser::schema::{TimingRecord, Trace};
use crate::utils::config::DEFAULT_REPEAT;
use crate::violations::schema::Violation;
use std::collections::BTreeSet;

/// What to measure and which policies to apply
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// Dotted module name to import
    pub module: String,

    /// Budget in milliseconds; `None` disables the budget check
    pub max_ms: Option<f64>,

    /// Modules that must not be imported; empty disables the ban check
    pub banned: BTreeSet<String>,

    /// Number of independent measurement runs (at least 1)
    pub repeat: usize,
}

impl CheckOptions {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            max_ms: None,
            banned: BTreeSet::new(),
            repeat: DEFAULT_REPEAT,
        }
    }

    pub fn with_max_ms(mut self, max_ms: f64) -> Self {
        self.max_ms = Some(max_ms);
        self
    }

    pub fn with_banned<I, S>(mut self, banned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banned.extend(banned.into_iter().map(Into::into));
        self
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Outcome of one check invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub module: String,

    /// Total of every run, in microseconds, in run order
    pub runs: Vec<u64>,

    /// Median of `runs`; this is the figure the budget is judged on
    pub median_us: u64,

    /// Fastest of `runs`
    pub min_us: u64,

    /// Per-module breakdown, taken from the final run
    pub representative_trace: Trace,

    pub violations: Vec<Violation>,

    /// Banned modules present in the trace, unique, in first-occurrence order
    pub banned_found: Vec<String>,
}

impl CheckResult {
    /// Reported total import time in milliseconds (the median across runs)
    pub fn total_ms(&self) -> f64 {
        self.median_us as f64 / 1000.0
    }

    pub fn median_ms(&self) -> f64 {
        self.median_us as f64 / 1000.0
    }

    pub fn min_ms(&self) -> f64 {
        self.min_us as f64 / 1000.0
    }

    pub fn num_runs(&self) -> usize {
        self.runs.len()
    }

    /// Whether the check passed (no violations)
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// All records of the representative run
    pub fn imports(&self) -> &[TimingRecord] {
        &self.representative_trace.records
    }

    /// The `n` slowest imports by self time, ties in trace order
    pub fn top_imports(&self, n: usize) -> Vec<&TimingRecord> {
        top_imports(&self.representative_trace.records, n)
    }
}
