use crate::flamegraph::FlamegraphConfig;
use crate::utils::config::{GuardConfig, DEFAULT_PYTHON, DEFAULT_REPEAT, DEFAULT_TOP_IMPORTS};
use std::path::PathBuf;

/// Arguments for the check command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Module to import
    pub module: String,

    /// Import time budget in milliseconds
    pub max_ms: Option<f64>,

    /// Banned modules
    pub banned: Vec<String>,

    /// Number of measurement runs
    pub repeat: usize,

    /// Python interpreter
    pub python: String,

    /// Number of slowest imports to report
    pub top: usize,

    /// Print the JSON report to stdout instead of the text summary
    pub json: bool,

    /// Only print violations
    pub quiet: bool,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the SVG flamegraph (optional)
    pub output_svg: Option<PathBuf>,

    /// Flamegraph configuration
    pub flamegraph_config: Option<FlamegraphConfig>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            module: String::new(),
            max_ms: None,
            banned: Vec::new(),
            repeat: DEFAULT_REPEAT,
            python: DEFAULT_PYTHON.to_string(),
            top: DEFAULT_TOP_IMPORTS,
            json: false,
            quiet: false,
            output_json: None,
            output_svg: None,
            flamegraph_config: None,
        }
    }
}

impl CheckArgs {
    /// Fill in anything the command line left unset from a policy file
    ///
    /// `max_ms`, `repeat`, `top` and `python` are taken from the file only
    /// when the corresponding `*_from_cli` value is `None`; ban lists are merged.
    pub fn apply_config(
        mut self,
        config: GuardConfig,
        repeat_from_cli: Option<usize>,
        top_from_cli: Option<usize>,
        python_from_cli: Option<String>,
    ) -> Self {
        self.max_ms = self.max_ms.or(config.max_ms);

        for module in config.banned {
            if !self.banned.contains(&module) {
                self.banned.push(module);
            }
        }

        self.repeat = repeat_from_cli
            .or(config.repeat)
            .unwrap_or(DEFAULT_REPEAT);
        self.top = top_from_cli.or(config.top).unwrap_or(DEFAULT_TOP_IMPORTS);
        self.python = python_from_cli
            .or(config.python)
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

        self
    }
}
