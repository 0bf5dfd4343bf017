//! Configuration constants.
//!
//! This module defines the default configuration used whenever the settings
//! file is missing or leaves a key out, plus the fixed operational parameters
//! of the fetcher (retry schedule, redirect limit).

/// Default User-Agent string for HTTP requests.
///
/// Overridden by the `user_agent` key of the settings file.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ads_insight/1.0)";

/// Per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 15.0;

/// Maximum number of fetch attempts per URL (initial attempt included).
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default location of the ad records output.
pub const DEFAULT_ADS_JSON: &str = "data/output/ads_output.json";
/// Default location of the insights output.
pub const DEFAULT_INSIGHTS_JSON: &str = "data/output/insights_output.json";

/// Default input file holding ad URLs, one per line.
pub const DEFAULT_ADS_FILE: &str = "data/input/batch_ads.txt";
/// Default input file holding search URLs, one per line.
pub const DEFAULT_START_URLS_FILE: &str = "data/input/start_urls.txt";

/// Default settings file location.
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.json";

// Retry strategy
/// Delay before the second attempt, in milliseconds.
/// Each following delay doubles.
pub const RETRY_INITIAL_DELAY_MS: u64 = 1000;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 8;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Accept header sent with every page request.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Currency reported for every ad record.
///
/// Spend data is never available, so there is nothing to detect the currency from.
pub const DEFAULT_SPEND_CURRENCY: &str = "USD";

/// Grouping key used for ads that carry neither an advertiser id nor a name.
pub const UNKNOWN_ADVERTISER_KEY: &str = "unknown";
