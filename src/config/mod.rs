//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, retry schedule, limits)
//! - Settings file loading (defaults merged with file overrides)
//! - CLI option types and parsing

mod constants;
mod settings;
mod types;

// Re-export all constants
pub use constants::*;
pub use settings::{load_settings, parse_settings, OutputPaths, Settings};
pub use types::{Config, LogFormat, LogLevel, Opt};
