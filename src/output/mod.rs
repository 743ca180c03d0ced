//! Report renderers and writers.
//!
//! This module handles presenting summary rows:
//! - Fixed-width text table
//! - JSON (stdout or file)

pub mod json;
pub mod table;

// Re-export main functions
pub use json::{render_json, to_report, write_report, ReportEntry};
pub use table::render_table;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
