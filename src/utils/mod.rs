//! Shared utilities.
//!
//! This module provides:
//! - The retry policy used by the page fetcher
//! - CSS selector parsing utilities

mod retry;
mod selector;

pub use retry::RetryPolicy;
pub use selector::parse_selector_unsafe;
