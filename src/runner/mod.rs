//! Measurement runners.
//!
//! Everything that touches processes lives here so the parser and policy
//! checks stay pure and testable against canned text.

pub mod python;

pub use python::{validate_module_name, ImportTimer, PythonRunner};
