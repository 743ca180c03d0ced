//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Reads and decodes the trace
//! 2. Pairs begin/end markers into durations
//! 3. Aggregates, filters, sorts and bounds the rows
//! 4. Renders the report (and optionally writes it to a file)

use super::models::{OutputFormat, SummarizeArgs};
use crate::aggregator::{reconstruct, summarize};
use crate::output::{render_json, render_table, write_report};
use crate::parser::read_trace;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The rendered report, ready to print
///
/// # Errors
/// * Trace file missing, unreadable or not a trace
/// * Report file write errors
pub fn execute_summarize(args: SummarizeArgs) -> Result<String> {
    let start_time = Instant::now();

    debug!("Summarizing trace: {}", args.trace.display());

    // Step 1: Load trace
    debug!("Step 1/4: Reading trace...");
    let events = read_trace(&args.trace)
        .with_context(|| format!("Failed to read trace {}", args.trace.display()))?;

    // Step 2: Pair begin/end markers
    debug!("Step 2/4: Pairing {} events...", events.len());
    let durations = reconstruct(&events);

    // Step 3: Aggregate and select
    let config = args.summary_config();
    debug!("Step 3/4: Summarizing with {:?}", config);
    let rows = summarize(&durations, &config);

    // Step 4: Render
    debug!("Step 4/4: Rendering {} rows as {:?}", rows.len(), args.format);
    let rendered = match args.format {
        OutputFormat::Table => render_table(&rows),
        OutputFormat::Json => {
            let mut json = render_json(&rows).context("Failed to render JSON report")?;
            json.push('\n');
            json
        }
    };

    if let Some(path) = &args.output {
        write_report(&rows, path).context("Failed to write report file")?;
        info!("✓ Report written to: {}", path.display());
    }

    debug!("Summary completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(rendered)
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if !args.min_ms.is_finite() {
        anyhow::bail!("--min-ms must be a finite number");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        let args = SummarizeArgs {
            trace: PathBuf::from("timings.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_trace() {
        assert!(validate_args(&SummarizeArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_nan_min_ms() {
        let args = SummarizeArgs {
            trace: PathBuf::from("timings.json"),
            min_ms: f64::NAN,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_missing_trace_is_error() {
        let args = SummarizeArgs {
            trace: PathBuf::from("/nonexistent/timings.json"),
            ..Default::default()
        };

        assert!(execute_summarize(args).is_err());
    }
}
