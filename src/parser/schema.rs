//! Input event definitions for timings traces.
//!
//! A trace is a flat list of begin/end markers in Chrome trace-event
//! format. Only the fields needed for pairing are kept.

/// Marker type of a timing event (`ph` in the trace)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// `"B"` - opens an occurrence
    Begin,
    /// `"E"` - closes the most recent open occurrence
    End,
    /// Anything else (instant, counter, metadata, missing ...)
    #[default]
    Other,
}

impl Phase {
    /// Map a trace phase code to a phase
    ///
    /// Unknown codes are not an error, they map to `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "B" => Phase::Begin,
            "E" => Phase::End,
            _ => Phase::Other,
        }
    }
}

/// One timing marker read from the trace
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawEvent {
    /// Event label, may repeat across the trace
    pub name: String,

    /// Begin, end, or ignored
    pub phase: Phase,

    /// Timestamp in microseconds, fractions kept
    pub timestamp: f64,

    /// Thread (track) the event was recorded on
    pub thread_id: i64,
}

impl RawEvent {
    pub fn new(name: impl Into<String>, phase: Phase, timestamp: f64, thread_id: i64) -> Self {
        Self {
            name: name.into(),
            phase,
            timestamp,
            thread_id,
        }
    }

    pub fn begin(name: impl Into<String>, timestamp: f64, thread_id: i64) -> Self {
        Self::new(name, Phase::Begin, timestamp, thread_id)
    }

    pub fn end(name: impl Into<String>, timestamp: f64, thread_id: i64) -> Self {
        Self::new(name, Phase::End, timestamp, thread_id)
    }
}
