//! Page fetching.
//!
//! A fetch is one HTTP GET (with retries) whose result is handed straight to
//! the Open Graph extractor and then dropped. The [`PageFetcher`] trait is
//! the seam between the record builder and the network: production code uses
//! [`HttpFetcher`], tests can substitute a stub.

mod request;

pub use request::HttpFetcher;

use crate::error_handling::FetchError;

/// Outcome of a completed HTTP exchange.
///
/// `html` is only present for a success status; other statuses still report
/// what was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// URL as requested
    pub url: String,
    /// HTTP status code of the final response
    pub status: u16,
    /// Response body, present only for 2xx responses
    pub html: Option<String>,
    /// URL of the final response after redirects
    pub final_url: String,
}

/// Fetches a page for metadata extraction.
///
/// Implementations are expected to apply their own retry policy; an `Err`
/// means the page is unavailable for this run.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetches `url`, returning the final outcome after any retries.
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}
