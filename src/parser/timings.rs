//! Trace loader for `--timings` output.
//!
//! Decodes raw JSON into `RawEvent`s. Individual records are decoded
//! leniently: missing or mistyped fields fall back to defaults so that a
//! partially populated trace still produces a report.

use super::schema::{Phase, RawEvent};
use crate::utils::config::EVENT_LIST_FIELD;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read and decode a timings trace file
///
/// **Public** - entry point used by the summarize command
///
/// The whole file is loaded into memory before decoding.
///
/// # Errors
/// * `ParseError::Io` - file cannot be read
/// * `ParseError::Json` - file is not valid JSON
/// * `ParseError::InvalidFormat` - JSON does not hold an event list
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<RawEvent>, ParseError> {
    let path = path.as_ref();

    debug!("Reading trace from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&content)?;

    parse_trace(&raw)
}

/// Decode raw trace JSON into events
///
/// **Public** - main entry point for parsing
///
/// Accepts either a bare array of event records or a Chrome trace object
/// with the array under `traceEvents`.
///
/// # Errors
/// * `ParseError::InvalidFormat` - no event list found, or every record
///   in a non-empty list was unusable
pub fn parse_trace(raw: &Value) -> Result<Vec<RawEvent>, ParseError> {
    let records = extract_event_list(raw)?;
    let events = parse_records(records)?;

    debug!("Parsed {} trace events", events.len());

    Ok(events)
}

/// Locate the event array inside the trace
///
/// **Private** - internal helper for parse_trace
fn extract_event_list(raw: &Value) -> Result<&[Value], ParseError> {
    match raw {
        Value::Array(records) => Ok(records),

        Value::Object(obj) => match obj.get(EVENT_LIST_FIELD) {
            Some(Value::Array(records)) => {
                debug!("Trace is object format, using '{}'", EVENT_LIST_FIELD);
                Ok(records)
            }
            Some(_) => Err(ParseError::InvalidFormat(format!(
                "'{}' must be an array",
                EVENT_LIST_FIELD
            ))),
            None => Err(ParseError::InvalidFormat(format!(
                "Trace object has no '{}' field",
                EVENT_LIST_FIELD
            ))),
        },

        _ => Err(ParseError::InvalidFormat(
            "Trace must be a JSON array or object".to_string(),
        )),
    }
}

/// Decode every record, skipping the ones that are not objects
///
/// **Private** - internal parsing logic
fn parse_records(records: &[Value]) -> Result<Vec<RawEvent>, ParseError> {
    let mut events = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match record.as_object() {
            Some(obj) => events.push(parse_event(obj)),
            None => warn!("Skipping trace record {}: not a JSON object", index),
        }
    }

    if events.is_empty() && !records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No trace record could be decoded".to_string(),
        ));
    }

    Ok(events)
}

/// Decode a single record with documented defaults
///
/// **Public** - useful for tests and for callers holding single records
///
/// Absent `name` is `""`, absent `ph` is `Phase::Other`, absent `ts`
/// and `tid` are `0`. Timestamps keep their fractional part.
pub fn parse_event(obj: &Map<String, Value>) -> RawEvent {
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let phase = obj
        .get("ph")
        .and_then(Value::as_str)
        .map(Phase::from_code)
        .unwrap_or_default();

    RawEvent {
        name,
        phase,
        timestamp: numeric_field(obj, "ts", parse_json_f64),
        thread_id: numeric_field(obj, "tid", parse_json_i64),
    }
}

/// Read a numeric field, defaulting to zero when absent or unusable
///
/// **Private** - internal helper for parse_event
fn numeric_field<T: Default>(
    obj: &Map<String, Value>,
    field: &str,
    parse: fn(&Value) -> Option<T>,
) -> T {
    match obj.get(field) {
        None | Some(Value::Null) => T::default(),
        Some(val) => parse(val).unwrap_or_else(|| {
            warn!("Field '{}' has unusable value {}, using 0", field, val);
            T::default()
        }),
    }
}

/// Parse a finite float from a JSON number or decimal string
///
/// **Public** - shared numeric coercion
pub fn parse_json_f64(val: &Value) -> Option<f64> {
    let parsed = match val {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|f| f.is_finite())
}

/// Parse an integer from a JSON number (floats are rounded) or decimal string
///
/// **Public** - shared numeric coercion
pub fn parse_json_i64(val: &Value) -> Option<i64> {
    if let Some(n) = val.as_i64() {
        Some(n)
    } else if let Some(n) = val.as_str().and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(n)
    } else {
        parse_json_f64(val).and_then(round_to_i64)
    }
}

fn round_to_i64(f: f64) -> Option<i64> {
    if f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.round() as i64)
    } else {
        None
    }
}
