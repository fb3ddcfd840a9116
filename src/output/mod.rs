//! Output rendering and file writers (JSON, SVG, text).

pub mod json;
pub mod report;
pub mod svg;
pub mod text;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use report::{to_report, ImportEntry, ReportDocument};
pub use svg::write_svg;
pub use text::{render_summary, render_violations};

/// Create parent directories of an output file if needed
///
/// **Private** - shared by the writers
fn create_parent_dirs(output_path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
