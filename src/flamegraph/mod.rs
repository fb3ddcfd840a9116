//! Flamegraph generation using the inferno library.
//!
//! This module converts collapsed import stacks into interactive SVG
//! flamegraphs showing where import time goes.

pub mod generator;

// Re-export main types
pub use generator::{generate_flamegraph, FlamegraphConfig};
