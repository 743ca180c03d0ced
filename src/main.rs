//! Trace Timings CLI
//!
//! Summarizes a timings trace by event name.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use trace_timings::aggregator::SortBy;
use trace_timings::commands::{execute_summarize, validate_args, OutputFormat, SummarizeArgs};
use trace_timings::utils::config::DEFAULT_TOP;

/// Summarize a --timings trace by event name
#[derive(Parser, Debug)]
#[command(name = "trace-timings")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to timings JSON
    timings: PathBuf,

    /// Number of rows to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP, allow_negative_numbers = true)]
    top: i64,

    /// Filter out entries with total below this many milliseconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    min_ms: f64,

    /// Sort by total, count, or name
    #[arg(long, value_enum, default_value_t = SortBy::Total)]
    sort: SortBy,

    /// Only include event names containing this substring
    #[arg(long, default_value = "")]
    contains: String,

    /// Output as JSON instead of table
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file
    #[arg(short, long, env = "TRACE_TIMINGS_OUTPUT")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout stays clean for the report)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = SummarizeArgs {
        trace: cli.timings,
        top: cli.top,
        min_ms: cli.min_ms,
        sort_by: cli.sort,
        contains: cli.contains,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        },
        output: cli.output,
    };

    // Validate args first
    validate_args(&args)?;

    let report = execute_summarize(args)?;
    print!("{}", report);

    Ok(())
}
