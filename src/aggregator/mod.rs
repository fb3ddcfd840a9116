//! Aggregation of trace data into summary statistics and collapsed stacks.
//!
//! This module transforms parsed import traces into:
//! - A robust total across repeated runs (median, min)
//! - Rankings of the slowest individual imports
//! - Collapsed stack format (for flamegraph generation)

pub mod metrics;
pub mod stack_builder;

// Re-export main types and functions
pub use metrics::{aggregate, top_imports, RunSummary};
pub use stack_builder::{build_collapsed_stacks, CollapsedStack};
