// Shared test helpers for input files and settings.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use ads_insight::config::OutputPaths;
use ads_insight::initialization::init_client;
use ads_insight::utils::RetryPolicy;
use ads_insight::{HttpFetcher, Settings};
use tempfile::NamedTempFile;

/// Writes one URL per line to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_urls_to_file(urls: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for url in urls {
        writeln!(file, "{}", url).expect("Failed to write URL");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Settings with a short timeout and outputs inside `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn test_settings(output_dir: &Path) -> Settings {
    Settings {
        user_agent: "ads_insight_test/1.0".to_string(),
        request_timeout_sec: 2.0,
        max_retries: 3,
        output: OutputPaths {
            ads_json: output_dir.join("ads_output.json"),
            insights_json: output_dir.join("insights_output.json"),
        },
    }
}

/// Fetcher with millisecond backoff so retry tests stay fast.
#[allow(dead_code)] // Used by other test files
pub fn fast_fetcher(settings: &Settings) -> HttpFetcher {
    let client = init_client(settings).expect("Failed to build HTTP client");
    HttpFetcher::with_client(
        client,
        RetryPolicy {
            max_attempts: settings.max_retries,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(80),
        },
    )
}

/// A page carrying the three Open Graph tags.
#[allow(dead_code)] // Used by other test files
pub fn og_page(title: &str, description: &str, image: &str) -> String {
    format!(
        r#"<!doctype html><html><head>
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:image" content="{image}">
</head><body>ad</body></html>"#
    )
}
