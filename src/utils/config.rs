//! Configuration and constants for the CLI.
//!
//! Policy values can come from three places, in increasing priority:
//! built-in defaults, an optional TOML policy file, and CLI flags.

use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Line format emitted by `python -X importtime`:
//   import time: <self us> | <cumulative us> | <indent><module>
pub const TRACE_LINE_PREFIX: &str = "import time:";
pub const FIELD_DELIMITER: char = '|';
pub const INDENT_WIDTH: usize = 2;

/// Interpreter used when neither `--python` nor the policy file name one
pub const DEFAULT_PYTHON: &str = "python3";

/// Environment variable consulted for the interpreter path
pub const PYTHON_ENV_VAR: &str = "IMPORTGUARD_PYTHON";

pub const DEFAULT_REPEAT: usize = 1;
pub const DEFAULT_TOP_IMPORTS: usize = 10;

pub const MAX_REPEAT: usize = 1000;
pub const MAX_TOP_IMPORTS: usize = 1000;

/// Policy file contents (e.g. `importguard.toml`)
///
/// ```toml
/// max_ms = 150.0
/// banned = ["pandas", "torch"]
/// repeat = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    /// Import time budget in milliseconds
    pub max_ms: Option<f64>,

    /// Modules that must not appear anywhere in the import tree
    #[serde(default)]
    pub banned: Vec<String>,

    /// Number of measurement runs
    pub repeat: Option<usize>,

    /// Python interpreter to invoke
    pub python: Option<String>,

    /// Number of slowest imports to report
    pub top: Option<usize>,
}

/// Load a policy file from disk
///
/// # Errors
/// * `ConfigError::ReadFailed` - If the file cannot be read
/// * `ConfigError::ParseFailed` - If the TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<GuardConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse policy file contents
pub fn parse_config(contents: &str) -> Result<GuardConfig, ConfigError> {
    let config: GuardConfig = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
max_ms = 150.5
banned = ["pandas", "torch"]
repeat = 5
python = "/usr/bin/python3.12"
top = 3
"#,
        )
        .unwrap();

        assert_eq!(config.max_ms, Some(150.5));
        assert_eq!(config.banned, vec!["pandas", "torch"]);
        assert_eq!(config.repeat, Some(5));
        assert_eq!(config.python.as_deref(), Some("/usr/bin/python3.12"));
        assert_eq!(config.top, Some(3));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, GuardConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("max_seconds = 3").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_config(temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFailed(_))));
    }
}
