//! Output JSON schema definitions for check reports.
//!
//! This module defines the structure of the JSON we print and write to disk.
//! Schema is versioned to allow future evolution.

use crate::guard::CheckResult;
use crate::utils::config::SCHEMA_VERSION;
use crate::violations::schema::Violation;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Module that was checked
    pub module: String,

    /// Reported total (median across runs)
    pub total_ms: f64,

    pub median_ms: f64,
    pub min_ms: f64,
    pub num_runs: usize,

    /// Every run's total, in run order
    pub runs_ms: Vec<f64>,

    pub passed: bool,
    pub violations: Vec<Violation>,
    pub banned_found: Vec<String>,

    /// Slowest imports by self time
    pub top_imports: Vec<ImportEntry>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One row of the slowest-imports table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportEntry {
    pub module: String,
    pub self_ms: f64,
    pub cumulative_ms: f64,
}

/// Convert a check result to the report format
///
/// **Public** - used by commands to create final output
pub fn to_report(result: &CheckResult, top_n: usize) -> ReportDocument {
    ReportDocument {
        version: SCHEMA_VERSION.to_string(),
        module: result.module.clone(),
        total_ms: result.total_ms(),
        median_ms: result.median_ms(),
        min_ms: result.min_ms(),
        num_runs: result.num_runs(),
        runs_ms: result.runs.iter().map(|us| *us as f64 / 1000.0).collect(),
        passed: result.passed(),
        violations: result.violations.clone(),
        banned_found: result.banned_found.clone(),
        top_imports: result
            .top_imports(top_n)
            .into_iter()
            .map(|record| ImportEntry {
                module: record.module.clone(),
                self_ms: record.self_time_ms(),
                cumulative_ms: record.cumulative_time_ms(),
            })
            .collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
