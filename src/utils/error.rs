//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed trace text is never an error: the parser skips what it cannot
//! decode. Policy violations are not errors either, they are reported as data.

use thiserror::Error;

/// Errors that can occur while running the measured interpreter
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to spawn Python interpreter '{python}': {source}")]
    SpawnFailed {
        python: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid module name: {0:?}")]
    InvalidModule(String),
}

/// Errors that can occur while aggregating repeated runs
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Cannot aggregate an empty set of measurements")]
    NoMeasurements,
}

/// Errors that can occur during an import check
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Measurement failed: {0}")]
    Runner(#[from] RunnerError),

    #[error("Aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("Invalid check options: {0}")]
    InvalidOptions(String),
}

/// Errors that can occur during flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Failed to render flamegraph: {0}")]
    Render(String),

    #[error("Flamegraph output is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a policy file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read policy file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Failed to parse policy file: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
