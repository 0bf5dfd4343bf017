//! Extraction statistics tracking.
//!
//! Counts what happened to each ad URL during a run so the end-of-run log
//! can say how many pages were usable and why the others were not.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FetchErrorKind;

/// Per-run extraction counters.
///
/// URLs are processed one at a time, so plain counters are enough.
#[derive(Debug, Clone)]
pub struct ExtractionStats {
    processed: usize,
    with_html: usize,
    non_success_status: usize,
    failures: HashMap<FetchErrorKind, usize>,
}

impl ExtractionStats {
    /// Creates counters with every failure kind at zero.
    pub fn new() -> Self {
        let failures = FetchErrorKind::iter().map(|kind| (kind, 0)).collect();
        ExtractionStats {
            processed: 0,
            with_html: 0,
            non_success_status: 0,
            failures,
        }
    }

    /// Records that a URL was turned into a record.
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// Records a fetch that returned a page body.
    pub fn record_html(&mut self) {
        self.with_html += 1;
    }

    /// Records a fetch that completed with a non-success status.
    pub fn record_non_success_status(&mut self) {
        self.non_success_status += 1;
    }

    /// Records a fetch that failed after all attempts.
    pub fn record_failure(&mut self, kind: FetchErrorKind) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    /// URLs turned into records.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Fetches that returned a page body.
    pub fn with_html(&self) -> usize {
        self.with_html
    }

    /// Fetches that completed with a non-success status.
    pub fn non_success_status(&self) -> usize {
        self.non_success_status
    }

    /// Failed fetches of one kind.
    pub fn failure_count(&self, kind: FetchErrorKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    /// Failed fetches of any kind.
    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }

    /// Logs a summary of the counters, listing only failure kinds that occurred.
    pub fn log_summary(&self) {
        log::info!(
            "Extraction statistics: processed={}, with_html={}, non_success_status={}, failed={}",
            self.processed,
            self.with_html,
            self.non_success_status,
            self.total_failures()
        );
        for kind in FetchErrorKind::iter() {
            let count = self.failure_count(kind);
            if count > 0 {
                log::info!("   {}: {}", kind, count);
            }
        }
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}
