//! Configuration and constants for the CLI.

/// Default number of rows in a summary
pub const DEFAULT_TOP: i64 = 10;

/// Trace timestamps are microseconds; reports are milliseconds
pub const MICROS_PER_MILLI: f64 = 1000.0;

/// Width of the name column in the table report (longer names are cut)
pub const NAME_COLUMN_WIDTH: usize = 50;

/// Width of the rule printed under the table header
pub const TABLE_RULE_WIDTH: usize = 72;

// Chrome trace objects keep the event list under this field.
// A bare top-level array is accepted as well.
pub const EVENT_LIST_FIELD: &str = "traceEvents";
