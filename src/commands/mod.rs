//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod summarize;

// Re-export main command functions
pub use models::{OutputFormat, SummarizeArgs};
pub use summarize::{execute_summarize, validate_args};
