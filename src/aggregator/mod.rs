//! Turn trace events into per-name statistics.
//!
//! This module transforms parsed events into:
//! - Durations (matched begin/end pairs)
//! - Aggregates per event name (count and total time)
//! - The ranked, filtered and bounded report rows

pub mod pairing;
pub mod summary;

// Re-export main types and functions
pub use pairing::{reconstruct, Duration, Reconstructor};
pub use summary::{aggregate, summarize, AggregateStat, SortBy, SummaryConfig, SummaryRow};
