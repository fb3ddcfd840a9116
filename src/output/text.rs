//! Human-readable check summaries.

use crate::guard::CheckResult;

const RULE_WIDTH: usize = 72;
const MODULE_COLUMN: usize = 44;

/// Render the full summary printed by `importguard check`
///
/// **Public** - used by the check command
pub fn render_summary(result: &CheckResult, top_n: usize) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!(
        "{} {}",
        if result.passed() { "✓ PASS" } else { "✗ FAIL" },
        result.module
    ));
    lines.push("=".repeat(RULE_WIDTH));

    if result.num_runs() > 1 {
        lines.push(format!(
            "Import time: {:.2}ms (median of {} runs, min {:.2}ms)",
            result.median_ms(),
            result.num_runs(),
            result.min_ms()
        ));
    } else {
        lines.push(format!("Import time: {:.2}ms", result.total_ms()));
    }
    lines.push(format!("Modules imported: {}", result.imports().len()));

    if result.representative_trace.is_empty() {
        lines.push("No import timings captured; did the import fail?".to_string());
    }

    if !result.violations.is_empty() {
        lines.push(String::new());
        lines.push("Violations:".to_string());
        lines.extend(render_violations(result));
    }

    let top = result.top_imports(top_n);
    if !top.is_empty() {
        lines.push(String::new());
        lines.push(format!("Top {} imports by self time:", top.len()));
        lines.push(format!(
            "  {:<width$} {:>10} {:>12}",
            "module",
            "self",
            "cumulative",
            width = MODULE_COLUMN
        ));
        lines.push(format!("  {}", "-".repeat(MODULE_COLUMN + 24)));

        for record in top {
            lines.push(format!(
                "  {:<width$} {:>8.2}ms {:>10.2}ms",
                truncate_name(&record.module),
                record.self_time_ms(),
                record.cumulative_time_ms(),
                width = MODULE_COLUMN
            ));
        }
    }

    lines.join("\n")
}

/// One line per violation
///
/// **Public** - also used on its own in quiet mode
pub fn render_violations(result: &CheckResult) -> Vec<String> {
    result
        .violations
        .iter()
        .map(|violation| format!("  ✗ [{}] {}", violation.kind, violation))
        .collect()
}

/// Truncate long module names from the left, keeping the leaf visible
///
/// **Private** - internal utility
fn truncate_name(name: &str) -> String {
    let len = name.chars().count();
    if len <= MODULE_COLUMN {
        return name.to_string();
    }
    let tail: String = name.chars().skip(len - (MODULE_COLUMN - 3)).collect();
    format!("...{}", tail)
}
