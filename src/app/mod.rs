//! Application glue around the extraction core.
//!
//! This module provides input file loading and the end-of-run summary used
//! by the binary.

pub mod input;
pub mod statistics;

// Re-export public API
pub use input::load_text_lines;
pub use statistics::{format_insights_summary, print_insights_summary};
