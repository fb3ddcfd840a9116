//! importguard
//!
//! Measure how long importing a Python module takes, attribute that time to
//! the modules it pulls in, and enforce time budgets and banned-import
//! policies.
//!
//! This crate provides the core implementation for the
//! `importguard` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! importguard check mypackage --max-ms 150 --ban pandas --repeat 5
//! ```
//!
//! As a library, parse captured `python -X importtime` output with
//! [`parser::parse_trace`], or run a whole check with
//! [`guard::check_import`] and any [`runner::ImportTimer`].

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod guard;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
pub mod violations;
