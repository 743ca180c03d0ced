//! Trace Timings
//!
//! Summarizes `--timings` traces (begin/end markers in Chrome trace-event
//! format) into per-event-name counts and cumulative durations.
//!
//! The pipeline is:
//! - [`parser`] decodes the trace into raw events
//! - [`aggregator`] pairs begin/end markers and builds the ranked summary
//! - [`output`] renders the summary as a table or JSON
//!
//! ```
//! use trace_timings::aggregator::{reconstruct, summarize, SummaryConfig};
//! use trace_timings::parser::RawEvent;
//!
//! let events = vec![RawEvent::begin("layout", 0.0, 1), RawEvent::end("layout", 1500.0, 1)];
//! let rows = summarize(&reconstruct(&events), &SummaryConfig::default());
//!
//! assert_eq!(rows[0].name, "layout");
//! assert_eq!(rows[0].stat.total_ms(), 1.5);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
