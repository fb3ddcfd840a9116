//! Python interpreter runner.
//!
//! Runs `<python> -X importtime -c "import <module>"` and hands back the
//! captured stderr, which is where the interpreter writes its import timings.

use crate::utils::config::DEFAULT_PYTHON;
use crate::utils::error::RunnerError;
use log::{debug, warn};
use std::process::Command;

/// Source of raw importtime text
///
/// **Public** - the seam between the pure core and process I/O.
/// Tests implement this with canned trace text.
pub trait ImportTimer {
    /// Measure one fresh import of `module` and return the raw trace text
    fn time_import(&self, module: &str) -> Result<String, RunnerError>;

    /// Measure `runs` independent imports, one after the other
    fn collect_traces(&self, module: &str, runs: usize) -> Result<Vec<String>, RunnerError> {
        (0..runs)
            .map(|run| {
                debug!("Measuring {} (run {}/{})", module, run + 1, runs);
                self.time_import(module)
            })
            .collect()
    }
}

/// Runs a real Python interpreter in a child process
#[derive(Debug, Clone)]
pub struct PythonRunner {
    python: String,
}

impl Default for PythonRunner {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl PythonRunner {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Interpreter this runner invokes
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl ImportTimer for PythonRunner {
    fn time_import(&self, module: &str) -> Result<String, RunnerError> {
        // The name ends up inside a `-c` script
        validate_module_name(module)?;

        let script = format!("import {}", module);
        debug!("Running {} -X importtime -c {:?}", self.python, script);

        let output = Command::new(&self.python)
            .args(["-X", "importtime", "-c", script.as_str()])
            .output()
            .map_err(|source| RunnerError::SpawnFailed {
                python: self.python.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        // A failed import still produces a (possibly partial) trace
        if !output.status.success() {
            warn!(
                "Importing {} exited with {}; timings may be incomplete",
                module, output.status
            );
            if let Some(last) = stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                warn!("  {}", last.trim());
            }
        }

        Ok(stderr)
    }
}

/// Check that `module` is a dotted Python identifier
///
/// **Public** - shared with CLI argument validation
///
/// # Errors
/// * `RunnerError::InvalidModule` - empty name, empty component, or a
///   component that is not an identifier
pub fn validate_module_name(module: &str) -> Result<(), RunnerError> {
    let valid = !module.is_empty() && module.split('.').all(is_identifier);

    if valid {
        Ok(())
    } else {
        Err(RunnerError::InvalidModule(module.to_string()))
    }
}

fn is_identifier(component: &str) -> bool {
    let mut chars = component.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
