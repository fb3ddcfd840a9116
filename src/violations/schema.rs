//! Violation types produced by the policy checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of policy was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Aggregated import time went over the budget
    #[serde(rename = "exceeded_budget")]
    BudgetExceeded,

    /// A banned module appeared somewhere in the import tree
    #[serde(rename = "banned_import")]
    BannedImport,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::BudgetExceeded => "exceeded_budget",
            ViolationKind::BannedImport => "banned_import",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single policy violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,

    /// Human-readable description
    pub message: String,

    /// The module the violation is about (the checked module for budgets,
    /// the banned module for ban-list hits)
    #[serde(rename = "module")]
    pub subject_module: String,

    #[serde(rename = "details", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.message, detail),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let mut violation = Violation {
            kind: ViolationKind::BannedImport,
            message: "app imports banned module: pandas".to_string(),
            subject_module: "pandas".to_string(),
            detail: None,
        };
        assert_eq!(violation.to_string(), "app imports banned module: pandas");

        violation.detail = Some("via app.io".to_string());
        assert_eq!(
            violation.to_string(),
            "app imports banned module: pandas (via app.io)"
        );
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ViolationKind::BudgetExceeded).unwrap(),
            "\"exceeded_budget\""
        );
        assert_eq!(
            serde_json::to_string(&ViolationKind::BannedImport).unwrap(),
            "\"banned_import\""
        );
    }
}
