//! Parsed trace data model.
//!
//! A `Trace` is the flattened representation of one measurement run.
//! Records keep the order the interpreter emitted them in, which is
//! completion order: leaves first, ancestors after their children.

use serde::{Deserialize, Serialize};

/// Timing for a single imported module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Fully qualified module name (e.g. "encodings.aliases")
    pub module: String,

    /// Microseconds spent in the module's own top-level code
    pub self_time_us: u64,

    /// Self time plus everything imported beneath it
    pub cumulative_time_us: u64,
}

impl TimingRecord {
    pub fn new(module: impl Into<String>, self_time_us: u64, cumulative_time_us: u64) -> Self {
        Self {
            module: module.into(),
            self_time_us,
            cumulative_time_us,
        }
    }

    /// Self time in milliseconds
    pub fn self_time_ms(&self) -> f64 {
        self.self_time_us as f64 / 1000.0
    }

    /// Cumulative time in milliseconds
    pub fn cumulative_time_ms(&self) -> f64 {
        self.cumulative_time_us as f64 / 1000.0
    }
}

/// One measurement run, flattened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Total time attributed to the requested import
    pub total_time_us: u64,

    /// Every decoded record in emitted order
    pub records: Vec<TimingRecord>,

    /// Nesting depth of each record, parallel to `records`.
    /// Only the parser and the stack builder look at this.
    #[serde(skip)]
    depths: Vec<usize>,
}

impl Trace {
    /// Build a trace whose records all sit at the top level
    pub fn from_records(total_time_us: u64, records: Vec<TimingRecord>) -> Self {
        let depths = vec![0; records.len()];
        Self {
            total_time_us,
            records,
            depths,
        }
    }

    pub(crate) fn with_depths(
        total_time_us: u64,
        records: Vec<TimingRecord>,
        depths: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(records.len(), depths.len());
        Self {
            total_time_us,
            records,
            depths,
        }
    }

    /// Total time in milliseconds
    pub fn total_time_ms(&self) -> f64 {
        self.total_time_us as f64 / 1000.0
    }

    /// True when the run produced no usable trace lines (usually a failed import)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records paired with their nesting depth
    pub(crate) fn depth_annotated(&self) -> impl DoubleEndedIterator<Item = (usize, &TimingRecord)> {
        // A deserialized trace has no depths; treat it as flat.
        self.records
            .iter()
            .enumerate()
            .map(move |(i, record)| (self.depths.get(i).copied().unwrap_or(0), record))
    }
}
