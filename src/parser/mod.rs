//! Trace parsing and event definitions.
//!
//! This module handles:
//! - Reading the timings file from disk
//! - Locating the event list (bare array or Chrome trace object)
//! - Lenient decoding of individual records

pub mod schema;
pub mod timings;

// Re-export main types
pub use schema::{Phase, RawEvent};
pub use timings::{parse_event, parse_trace, read_trace};
