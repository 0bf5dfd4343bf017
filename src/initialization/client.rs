//! HTTP client initialization.

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{Settings, MAX_REDIRECT_HOPS};

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from settings
/// - Per-request timeout from settings
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS` hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(settings: &Settings) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(settings.request_timeout())
        .user_agent(settings.user_agent.clone())
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&Settings::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_settings() {
        let settings = Settings {
            user_agent: "ads_insight_test/1.0".to_string(),
            request_timeout_sec: 0.5,
            ..Default::default()
        };
        assert!(init_client(&settings).is_ok());
    }
}
