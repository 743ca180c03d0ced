//! Pair begin/end markers into durations.
//!
//! Every `(name, thread)` key owns a stack of open begin timestamps.
//! An end marker closes the most recent open begin for its key, so
//! nested occurrences of the same event resolve innermost first:
//!
//! ```text
//! B(parse,10) B(parse,20) E(parse,25) E(parse,40)
//!   -> parse 5    (25 - 20)
//!   -> parse 30   (40 - 10)
//! ```

use crate::parser::{Phase, RawEvent};
use log::debug;
use std::collections::HashMap;

/// A completed occurrence of a named event
#[derive(Debug, Clone, PartialEq)]
pub struct Duration {
    /// Event name
    pub name: String,

    /// End timestamp minus begin timestamp (microseconds, may be negative)
    pub elapsed: f64,
}

impl Duration {
    pub fn new(name: impl Into<String>, elapsed: f64) -> Self {
        Self {
            name: name.into(),
            elapsed,
        }
    }
}

/// Open begin timestamps per event name, last opened on top
type OpenStacks = HashMap<String, Vec<f64>>;

/// Incremental begin/end matcher
///
/// **Public** - `reconstruct` is a fold over this type
#[derive(Debug, Default)]
pub struct Reconstructor {
    /// Keyed by thread first, then name, so ends can look up by `&str`
    open: HashMap<i64, OpenStacks>,

    /// Durations in the order their end markers were seen
    durations: Vec<Duration>,

    /// End markers that found nothing to close
    orphan_ends: usize,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event
    ///
    /// Never fails: orphan ends and unknown phases are ignored.
    pub fn push(&mut self, event: &RawEvent) {
        match event.phase {
            Phase::Begin => self.open_begin(event),
            Phase::End => self.close_end(event),
            Phase::Other => {}
        }
    }

    fn open_begin(&mut self, event: &RawEvent) {
        let stacks = self.open.entry(event.thread_id).or_default();

        match stacks.get_mut(event.name.as_str()) {
            Some(stack) => stack.push(event.timestamp),
            None => {
                stacks.insert(event.name.clone(), vec![event.timestamp]);
            }
        }
    }

    fn close_end(&mut self, event: &RawEvent) {
        let started = self
            .open
            .get_mut(&event.thread_id)
            .and_then(|stacks| stacks.get_mut(event.name.as_str()))
            .and_then(Vec::pop);

        match started {
            Some(begin) => self
                .durations
                .push(Duration::new(event.name.clone(), event.timestamp - begin)),
            None => self.orphan_ends += 1,
        }
    }

    /// Number of begins still waiting for their end
    pub fn open_count(&self) -> usize {
        self.open
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Number of end markers dropped so far
    pub fn orphan_ends(&self) -> usize {
        self.orphan_ends
    }

    /// Finish the run, discarding unmatched begins
    pub fn finish(self) -> Vec<Duration> {
        let unclosed = self.open_count();
        if unclosed > 0 || self.orphan_ends > 0 {
            debug!(
                "Discarded {} unclosed begin(s) and {} orphan end(s)",
                unclosed, self.orphan_ends
            );
        }

        self.durations
    }
}

/// Reconstruct durations from a sequence of raw events
///
/// **Public** - main entry point for pairing
///
/// # Arguments
/// * `events` - Trace events in file order
///
/// # Returns
/// One duration per matched end marker, in the order the ends appear
pub fn reconstruct(events: &[RawEvent]) -> Vec<Duration> {
    debug!("Pairing {} trace events", events.len());

    let mut reconstructor = Reconstructor::new();
    for event in events {
        reconstructor.push(event);
    }

    let durations = reconstructor.finish();

    debug!("Reconstructed {} durations", durations.len());

    durations
}
