//! Settings file loading.
//!
//! The settings file is a small JSON document:
//!
//! ```json
//! {
//!   "user_agent": "Mozilla/5.0 (compatible; ads_insight/1.0)",
//!   "request_timeout_sec": 15,
//!   "max_retries": 3,
//!   "output": {
//!     "ads_json": "data/output/ads_output.json",
//!     "insights_json": "data/output/insights_output.json"
//!   }
//! }
//! ```
//!
//! Every key is optional. Keys missing from the file keep the values from
//! [`Settings::default`], which is built from the constants in
//! [`crate::config::constants`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_ADS_JSON, DEFAULT_INSIGHTS_JSON, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::error_handling::SettingsError;

/// Runtime settings consumed by the fetcher and the output writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP User-Agent header value
    pub user_agent: String,
    /// Per-request timeout in seconds (fractions allowed)
    pub request_timeout_sec: f64,
    /// Maximum fetch attempts per URL
    pub max_retries: u32,
    /// Output file locations
    pub output: OutputPaths,
}

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// Ad records file
    pub ads_json: PathBuf,
    /// Insights report file
    pub insights_json: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            output: OutputPaths::default(),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            ads_json: PathBuf::from(DEFAULT_ADS_JSON),
            insights_json: PathBuf::from(DEFAULT_INSIGHTS_JSON),
        }
    }
}

impl Settings {
    /// Request timeout as a `Duration`.
    ///
    /// Zero, negative, non-finite or unrepresentably large values fall back
    /// to the default timeout.
    pub fn request_timeout(&self) -> Duration {
        let default = Duration::from_secs_f64(DEFAULT_REQUEST_TIMEOUT_SECS);
        if self.request_timeout_sec > 0.0 {
            Duration::try_from_secs_f64(self.request_timeout_sec).unwrap_or(default)
        } else {
            default
        }
    }

    /// Replaces blank values that would otherwise break the run with defaults.
    fn normalized(mut self) -> Self {
        let defaults = Settings::default();
        if self.user_agent.trim().is_empty() {
            self.user_agent = defaults.user_agent;
        }
        if self.output.ads_json.as_os_str().is_empty() {
            self.output.ads_json = defaults.output.ads_json;
        }
        if self.output.insights_json.as_os_str().is_empty() {
            self.output.insights_json = defaults.output.insights_json;
        }
        self
    }
}

/// Parses settings from a JSON string, merging over the defaults.
pub fn parse_settings(json: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = serde_json::from_str(json)?;
    Ok(settings.normalized())
}

/// Loads settings from `path`.
///
/// A missing file is not an error: the defaults are returned. A file that
/// exists but cannot be read or parsed is reported as a `SettingsError`.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        log::debug!(
            "Settings file {} not found, using defaults",
            path.display()
        );
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&contents)?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
