//! HTTP fetcher backed by `reqwest`.

use reqwest::header::ACCEPT;
use url::Url;

use super::{FetchResult, PageFetcher};
use crate::config::{Settings, ACCEPT_HTML};
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_client;
use crate::utils::RetryPolicy;

/// Fetches pages over HTTP, retrying transient failures.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpFetcher {
    /// Builds a fetcher from the user agent, timeout and attempt budget in `settings`.
    pub fn new(settings: &Settings) -> Result<Self, InitializationError> {
        let client = init_client(settings)?;
        Ok(Self::with_client(
            client,
            RetryPolicy::with_max_attempts(settings.max_retries),
        ))
    }

    /// Uses an existing client and retry policy.
    pub fn with_client(client: reqwest::Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Performs a single GET without retrying.
    async fn fetch_once(&self, url: &str) -> Result<FetchResult, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        log::debug!("Requesting {url}");
        let http_error = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(parsed)
            .header(ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        let final_url = response.url().to_string();
        log::debug!("{url}: HTTP {} (final URL {final_url})", status.as_u16());

        let html = if status.is_success() {
            Some(response.text().await.map_err(http_error)?)
        } else {
            None
        };

        Ok(FetchResult {
            url: url.to_string(),
            status: status.as_u16(),
            html,
            final_url,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        self.retry.run(|| self.fetch_once(url)).await
    }
}
