//! Raw measurements of one module across repeated runs.

use crate::aggregator::metrics::{aggregate, RunSummary};
use crate::parser::import_trace::parse_trace;
use crate::parser::schema::Trace;
use crate::utils::error::AggregateError;

/// Per-run totals plus the breakdown of a single run
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSet {
    pub module: String,

    /// Total of every run, in microseconds, in run order
    pub runs: Vec<u64>,

    /// Parsed trace of the final run
    pub representative_trace: Trace,
}

impl MeasurementSet {
    /// Parse every raw trace; earlier runs only contribute their totals
    pub fn from_raw_traces<S: AsRef<str>>(module: impl Into<String>, raw_traces: &[S]) -> Self {
        let module = module.into();
        let mut runs = Vec::with_capacity(raw_traces.len());
        let mut representative_trace = Trace::default();

        for raw in raw_traces {
            let trace = parse_trace(raw.as_ref(), &module);
            runs.push(trace.total_time_us);
            representative_trace = trace;
        }

        Self {
            module,
            runs,
            representative_trace,
        }
    }

    /// Median and minimum of the run totals
    ///
    /// # Errors
    /// * `AggregateError::NoMeasurements` - the set holds no runs
    pub fn summary(&self) -> Result<RunSummary, AggregateError> {
        aggregate(&self.runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_trace_and_every_total() {
        let raw = [
            "import time: 3 | 40 | app",
            "import time: 9 | 20 | app",
        ];
        let set = MeasurementSet::from_raw_traces("app", &raw);

        assert_eq!(set.runs, vec![40, 20]);
        assert_eq!(set.representative_trace.records[0].self_time_us, 9);
        assert_eq!(set.summary().unwrap().median_us, 30);
    }

    #[test]
    fn test_empty_set_has_no_summary() {
        let set = MeasurementSet::from_raw_traces("app", &[] as &[&str]);

        assert!(set.runs.is_empty());
        assert!(set.representative_trace.is_empty());
        assert!(matches!(set.summary(), Err(AggregateError::NoMeasurements)));
    }
}
