//! Budget and ban-list evaluation.
//!
//! Checks run in a fixed order: the budget first, then the ban list.
//! Callers may rely on budget violations preceding banned-import ones.

use super::schema::{Violation, ViolationKind};
use crate::parser::schema::Trace;
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Outcome of evaluating the policies for one check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Violations in evaluation order
    pub violations: Vec<Violation>,

    /// Banned modules present in the trace, unique, in first-occurrence order
    pub banned_found: Vec<String>,
}

/// Evaluate the budget and ban list against a measured import
///
/// **Public** - main entry point for policy checks
///
/// # Arguments
/// * `module` - The module that was measured
/// * `trace` - The representative run
/// * `aggregated_total_us` - Aggregated total across runs (the median)
/// * `budget_ms` - Maximum allowed import time; `None` disables the check
/// * `banned` - Modules that must not be imported; empty disables the check
pub fn evaluate(
    module: &str,
    trace: &Trace,
    aggregated_total_us: u64,
    budget_ms: Option<f64>,
    banned: &BTreeSet<String>,
) -> Evaluation {
    let mut violations = Vec::new();

    if let Some(budget_ms) = budget_ms {
        check_budget(module, aggregated_total_us, budget_ms, &mut violations);
    }

    let banned_found = if banned.is_empty() {
        Vec::new()
    } else {
        find_banned_imports(trace, banned)
    };

    for banned_module in &banned_found {
        violations.push(Violation {
            kind: ViolationKind::BannedImport,
            message: format!("{} imports banned module: {}", module, banned_module),
            subject_module: banned_module.clone(),
            detail: None,
        });
    }

    debug!(
        "Evaluated {}: {} violations, {} banned modules found",
        module,
        violations.len(),
        banned_found.len()
    );

    Evaluation {
        violations,
        banned_found,
    }
}

/// Check the time budget
///
/// **Private** - internal helper for evaluate
fn check_budget(module: &str, total_us: u64, budget_ms: f64, violations: &mut Vec<Violation>) {
    let observed_ms = total_us as f64 / 1000.0;

    // Hitting the budget exactly is a pass
    if observed_ms > budget_ms {
        let overage_ms = observed_ms - budget_ms;
        violations.push(Violation {
            kind: ViolationKind::BudgetExceeded,
            message: format!(
                "{} imported in {:.0}ms, over the {:.0}ms budget by {:.0}ms",
                module, observed_ms, budget_ms, overage_ms
            ),
            subject_module: module.to_string(),
            detail: Some(format!(
                "observed {:.3}ms, budget {:.3}ms",
                observed_ms, budget_ms
            )),
        });
    }
}

/// Find banned modules anywhere in the trace
///
/// **Public** - usable on its own when only the names are needed
///
/// Every record is considered regardless of how deeply it is nested.
/// Matching is on the full module name.
pub fn find_banned_imports(trace: &Trace, banned: &BTreeSet<String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();

    trace
        .records
        .iter()
        .map(|record| record.module.as_str())
        .filter(|name| banned.contains(*name))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
