use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a JSON report file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Module: {}", report.module);
    println!("  Total: {:.2}ms over {} runs", report.total_ms, report.num_runs);
    println!("  Passed: {}", report.passed);
    println!("  Violations: {}", report.violations.len());
    println!("  Top Imports: {}", report.top_imports.len());

    if report.version != SCHEMA_VERSION {
        println!(
            "  Note: report schema v{} differs from current v{}",
            report.version, SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("importguard Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  module: string            - Module that was checked");
        println!("  total_ms: number          - Reported import time (median)");
        println!("  median_ms: number         - Median across runs");
        println!("  min_ms: number            - Fastest run");
        println!("  num_runs: number          - Number of measurement runs");
        println!("  runs_ms: array            - Total of every run");
        println!("  passed: boolean           - True when no violations were found");
        println!("  violations: array         - Policy violations");
        println!("    type: string            - 'exceeded_budget' or 'banned_import'");
        println!("    message: string         - Human-readable description");
        println!("    module: string          - Module the violation is about");
        println!("    details: string?        - Extra detail (if any)");
        println!("  banned_found: array       - Banned modules present in the import tree");
        println!("  top_imports: array        - Slowest imports by self time");
        println!("    module: string          - Module name");
        println!("    self_ms: number         - Self time");
        println!("    cumulative_ms: number   - Self time plus children");
        println!("  generated_at: string      - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("importguard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Measure and enforce Python import-time budgets and banned imports.");
}
