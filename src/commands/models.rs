use crate::aggregator::{SortBy, SummaryConfig};
use crate::utils::config::{DEFAULT_TOP, MICROS_PER_MILLI};
use std::path::PathBuf;

/// How the summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Path to the timings trace
    pub trace: PathBuf,

    /// Maximum number of rows
    pub top: i64,

    /// Minimum total in milliseconds
    pub min_ms: f64,

    /// Ranking field
    pub sort_by: SortBy,

    /// Literal substring filter on event names
    pub contains: String,

    /// Table or JSON on stdout
    pub format: OutputFormat,

    /// Optional path for a JSON report file
    pub output: Option<PathBuf>,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::new(),
            top: DEFAULT_TOP,
            min_ms: 0.0,
            sort_by: SortBy::Total,
            contains: String::new(),
            format: OutputFormat::Table,
            output: None,
        }
    }
}

impl SummarizeArgs {
    /// Selection options for the aggregator, minimum converted to microseconds
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig {
            name_contains: self.contains.clone(),
            min_total: self.min_ms * MICROS_PER_MILLI,
            sort_by: self.sort_by,
            top: self.top,
        }
    }
}
