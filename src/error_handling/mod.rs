//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, settings, fetch, run)
//! - Fetch error categorization
//! - Extraction statistics tracking

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ExtractionStats;
pub use types::{FetchError, FetchErrorKind, InitializationError, RunError, SettingsError};
