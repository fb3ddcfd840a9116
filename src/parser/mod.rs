//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Decoding single `-X importtime` lines
//! - Reconstructing the flat record list and total time of a run
//! - Defining the parsed trace data model

pub mod import_trace;
pub mod schema;

// Re-export main types
pub use import_trace::{decode_line, parse_trace, TraceLine};
pub use schema::{TimingRecord, Trace};
