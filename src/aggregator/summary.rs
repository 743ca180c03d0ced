//! Aggregate durations per event name and select the rows to report.
//!
//! Pipeline: fold by name, keep names containing the filter text,
//! sort, drop totals under the minimum, keep the first `top` rows.

use super::pairing::Duration;
use crate::utils::config::{DEFAULT_TOP, MICROS_PER_MILLI};
use clap::ValueEnum;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Count and cumulative duration of one event name
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateStat {
    /// Number of completed durations
    pub count: u64,

    /// Sum of elapsed time in microseconds
    pub total: f64,
}

impl AggregateStat {
    pub fn new(count: u64, total: f64) -> Self {
        Self { count, total }
    }

    /// Total converted to milliseconds
    pub fn total_ms(&self) -> f64 {
        self.total / MICROS_PER_MILLI
    }

    fn record(&mut self, elapsed: f64) {
        self.count += 1;
        self.total += elapsed;
    }
}

/// One line of the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub stat: AggregateStat,
}

impl SummaryRow {
    pub fn new(name: impl Into<String>, stat: AggregateStat) -> Self {
        Self {
            name: name.into(),
            stat,
        }
    }
}

/// Field used to rank rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortBy {
    /// Cumulative duration, largest first
    #[default]
    Total,
    /// Number of occurrences, largest first
    Count,
    /// Event name, A to Z ignoring case
    Name,
}

/// Selection options for `summarize`
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Literal substring a name must contain (empty keeps everything)
    pub name_contains: String,

    /// Minimum total in microseconds (zero or less disables the filter)
    pub min_total: f64,

    /// Ranking field
    pub sort_by: SortBy,

    /// Maximum number of rows (zero or less yields nothing)
    pub top: i64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            name_contains: String::new(),
            min_total: 0.0,
            sort_by: SortBy::Total,
            top: DEFAULT_TOP,
        }
    }
}

/// Fold durations into per-name statistics
///
/// **Public** - first stage of `summarize`
///
/// Rows come out in the order each name was first seen.
pub fn aggregate(durations: &[Duration]) -> Vec<SummaryRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<SummaryRow> = Vec::new();

    for duration in durations {
        let slot = *index.entry(duration.name.as_str()).or_insert_with(|| {
            rows.push(SummaryRow::new(duration.name.clone(), AggregateStat::default()));
            rows.len() - 1
        });
        rows[slot].stat.record(duration.elapsed);
    }

    rows
}

/// Summarize durations into ranked, filtered, bounded rows
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `durations` - Output of `reconstruct`
/// * `config` - Filter, sort and limit options
///
/// # Returns
/// Rows in report order; every name appears at most once
pub fn summarize(durations: &[Duration], config: &SummaryConfig) -> Vec<SummaryRow> {
    let mut rows = aggregate(durations);
    debug!("Aggregated {} durations into {} names", durations.len(), rows.len());

    if !config.name_contains.is_empty() {
        rows.retain(|row| row.name.contains(config.name_contains.as_str()));
    }

    sort_rows(&mut rows, config.sort_by);

    if config.min_total > 0.0 {
        rows.retain(|row| row.stat.total >= config.min_total);
    }

    rows.truncate(row_limit(config.top));

    debug!("Selected {} rows", rows.len());

    rows
}

/// Number of rows kept for a `top` setting
///
/// Zero or less keeps nothing; values past `usize::MAX` keep everything.
fn row_limit(top: i64) -> usize {
    if top <= 0 {
        0
    } else {
        usize::try_from(top).unwrap_or(usize::MAX)
    }
}

/// Stable sort, so ties keep first-seen order
///
/// **Private** - internal helper for summarize
fn sort_rows(rows: &mut [SummaryRow], sort_by: SortBy) {
    match sort_by {
        SortBy::Total => rows.sort_by(|a, b| {
            b.stat
                .total
                .partial_cmp(&a.stat.total)
                .unwrap_or(Ordering::Equal)
        }),
        SortBy::Count => rows.sort_by(|a, b| b.stat.count.cmp(&a.stat.count)),
        SortBy::Name => rows.sort_by_cached_key(|row| row.name.to_lowercase()),
    }
}
