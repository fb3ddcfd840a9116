//! Parser for `python -X importtime` output.
//!
//! The interpreter writes one line per imported module to stderr:
//!
//! ```text
//! import time: self [us] | cumulative | imported package
//! import time:       284 |        284 |   posix
//! import time:      1064 |       1395 |   encodings
//! ```
//!
//! Lines are emitted in completion order, so a module's children always
//! precede it. Nesting is expressed through indentation of the module name.
//! Anything that does not fit this shape (the header row, blank lines,
//! warnings printed by the imported code) is skipped, never reported.

use super::schema::{TimingRecord, Trace};
use crate::utils::config::{FIELD_DELIMITER, INDENT_WIDTH, TRACE_LINE_PREFIX};
use log::debug;

/// A single decoded trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine<'a> {
    /// Nesting level (0 = imported directly by the measured statement)
    pub depth: usize,
    pub self_time_us: u64,
    pub cumulative_time_us: u64,
    pub module: &'a str,
}

impl TraceLine<'_> {
    fn to_record(self) -> TimingRecord {
        TimingRecord::new(self.module, self.self_time_us, self.cumulative_time_us)
    }
}

/// Decode one line of importtime output
///
/// **Public** - the line-level building block of `parse_trace`
///
/// # Returns
/// `None` for anything that is not a well-formed trace line. This function
/// never panics, whatever the input.
pub fn decode_line(line: &str) -> Option<TraceLine<'_>> {
    let rest = line.trim_start().strip_prefix(TRACE_LINE_PREFIX)?;

    let mut fields = rest.splitn(3, FIELD_DELIMITER);
    let self_time_us = parse_micros(fields.next()?)?;
    let cumulative_time_us = parse_micros(fields.next()?)?;
    let name_field = fields.next()?;

    // A corrupted line can carry numbers that contradict each other
    if cumulative_time_us < self_time_us {
        return None;
    }

    // One space separates the delimiter from the indentation
    let name_field = name_field.strip_prefix(' ').unwrap_or(name_field);
    let module = name_field.trim_start();
    let indent = name_field[..name_field.len() - module.len()].chars().count();
    if indent % INDENT_WIDTH != 0 {
        return None;
    }

    let module = module.trim_end();
    if module.is_empty() {
        return None;
    }

    Some(TraceLine {
        depth: indent / INDENT_WIDTH,
        self_time_us,
        cumulative_time_us,
        module,
    })
}

/// Parse a microsecond column, tolerating surrounding whitespace only
///
/// **Private** - internal utility
fn parse_micros(field: &str) -> Option<u64> {
    let digits = field.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflow is treated like any other garbage
    digits.parse().ok()
}

/// Parse the full importtime stream of one run
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw_text` - Captured stderr of one measurement run (may be empty)
/// * `requested_module` - The module the run imported
///
/// # Returns
/// The flattened trace. The total is the cumulative time of the requested
/// module's top-level package, or of the last record when that package never
/// shows up, or 0 for an empty stream.
pub fn parse_trace(raw_text: &str, requested_module: &str) -> Trace {
    let mut lines = Vec::new();
    let mut skipped = 0usize;

    for line in raw_text.lines() {
        match decode_line(line) {
            Some(decoded) => lines.push(decoded),
            None => skipped += 1,
        }
    }

    debug!(
        "Decoded {} trace lines for {} ({} lines skipped)",
        lines.len(),
        requested_module,
        skipped
    );

    let total_time_us = find_total_time(&lines, requested_module);

    if lines.is_empty() {
        debug!("No import timings found for {}", requested_module);
    }

    let depths = lines.iter().map(|line| line.depth).collect();
    let records = lines.into_iter().map(TraceLine::to_record).collect();

    Trace::with_depths(total_time_us, records, depths)
}

/// Pick the total import time out of the decoded lines
///
/// **Private** - internal helper for parse_trace
fn find_total_time(lines: &[TraceLine<'_>], requested_module: &str) -> u64 {
    let top_level = requested_module
        .split('.')
        .next()
        .unwrap_or(requested_module);

    // min_by_key keeps the first of equally shallow matches
    let requested = lines
        .iter()
        .filter(|line| line.module == top_level)
        .min_by_key(|line| line.depth);

    match requested.or_else(|| lines.last()) {
        Some(line) => line.cumulative_time_us,
        None => 0,
    }
}
