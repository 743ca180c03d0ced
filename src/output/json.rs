//! JSON report rendering and file output.
//!
//! The report is an array of `{ name, count, total_ms }` objects in
//! summary order.

use super::validate_path;
use crate::aggregator::SummaryRow;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One object of the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub count: u64,
    pub total_ms: f64,
}

impl From<&SummaryRow> for ReportEntry {
    fn from(row: &SummaryRow) -> Self {
        Self {
            name: row.name.clone(),
            count: row.stat.count,
            total_ms: row.stat.total_ms(),
        }
    }
}

/// Convert summary rows to report entries
pub fn to_report(rows: &[SummaryRow]) -> Vec<ReportEntry> {
    rows.iter().map(ReportEntry::from).collect()
}

/// Render rows as pretty-printed JSON
///
/// **Public** - used for `--json` output on stdout
pub fn render_json(rows: &[SummaryRow]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(&to_report(rows)).map_err(OutputError::SerializationFailed)
}

/// Write the JSON report to a file
///
/// **Public** - main entry point for file output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(rows: &[SummaryRow], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

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

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &to_report(rows))
        .map_err(OutputError::SerializationFailed)?;
    writeln!(writer).map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Report written ({} rows)", rows.len());

    Ok(())
}
