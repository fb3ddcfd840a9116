//! Build collapsed stack format from a parsed import trace.
//!
//! Collapsed stacks are the input format for flamegraph generation.
//! Format: "parent;child;grandchild weight"
//!
//! Example: "json;json.decoder;re 1000"
//! This means: importing json imported json.decoder, which imported re,
//! and re's own top-level code took 1000us.

use crate::parser::schema::Trace;
use log::debug;
use std::collections::HashMap;

/// A single collapsed stack entry
///
/// **Public** - used by flamegraph generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedStack {
    /// Import chain as semicolon-separated string
    pub stack: String,

    /// Weight (self time in microseconds)
    pub weight: u64,
}

impl CollapsedStack {
    /// Create a new collapsed stack
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Render as a collapsed-stack line
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }
}

/// Build collapsed stacks from a parsed trace
///
/// **Public** - main entry point for stack building
///
/// # Algorithm
/// importtime lists children before their parent, so walking the records
/// backwards visits every parent before its children. A module belongs to
/// the nearest preceding (in reverse order) entry with a smaller depth.
/// Identical chains (a module imported twice along the same path) are summed.
pub fn build_collapsed_stacks(trace: &Trace) -> Vec<CollapsedStack> {
    debug!("Building collapsed stacks from {} records", trace.records.len());

    let mut stack_map: HashMap<String, u64> = HashMap::new();
    let mut chain: Vec<(usize, &str)> = Vec::new();

    for (depth, record) in trace.depth_annotated().rev() {
        while chain.last().is_some_and(|(parent_depth, _)| *parent_depth >= depth) {
            chain.pop();
        }
        chain.push((depth, record.module.as_str()));

        let stack_str = chain
            .iter()
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(";");

        *stack_map.entry(stack_str).or_insert(0) += record.self_time_us;
    }

    let mut stacks: Vec<CollapsedStack> = stack_map
        .into_iter()
        .map(|(stack, weight)| CollapsedStack::new(stack, weight))
        .collect();

    // Heaviest first; name order keeps the output deterministic
    stacks.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.stack.cmp(&b.stack)));

    debug!("Built {} unique collapsed stacks", stacks.len());

    stacks
}
