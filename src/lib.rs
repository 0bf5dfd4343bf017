//! ads_insight library: ad metadata extraction and insights aggregation
//!
//! This library turns a list of ad-transparency ad URLs (or, failing that,
//! search URLs) into two JSON documents: one normalized record per ad and a
//! rolled-up insights report (ads per advertiser, ads per region, search
//! terms).
//!
//! # Example
//!
//! ```no_run
//! use ads_insight::{run_extraction, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     ads_file: PathBuf::from("ads.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_extraction(config).await?;
//! println!("Processed {} ad URLs", report.ads_processed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. URLs are processed sequentially, so
//! a current-thread runtime is sufficient.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod utils;

// Re-export public API
pub use config::{load_settings, Config, LogFormat, LogLevel, Opt, Settings};
pub use error_handling::{FetchError, RunError};
pub use extract::{build_insights, extract_from_ad_urls};
pub use fetch::{FetchResult, HttpFetcher, PageFetcher};
pub use models::{AdRecord, AdType, InsightsReport, InsightsSource};
pub use run::{run_extraction, RunReport};

// Internal run module (contains the batch orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;

    use crate::app::load_text_lines;
    use crate::config::Config;
    use crate::error_handling::{ExtractionStats, RunError};
    use crate::export::{save_ads_records, save_insights};
    use crate::extract::{build_insights, extract_from_ad_urls_with_stats};
    use crate::fetch::HttpFetcher;
    use crate::models::{AdRecord, InsightsReport};

    /// Results of an extraction run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of ad URLs turned into records
        pub ads_processed: usize,
        /// Number of search URLs read (only used when there are no ads)
        pub search_urls: usize,
        /// Where the ad records were written, if any ads were processed
        pub ads_path: Option<PathBuf>,
        /// Computed insights, unless disabled
        pub insights: Option<InsightsReport>,
        /// Where the insights were written, unless disabled
        pub insights_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one extraction batch with the provided configuration.
    ///
    /// Reads both input lists, builds ad records when ad URLs are present,
    /// writes them, then computes and writes insights (from the ads, or from
    /// the search URLs when there are none).
    ///
    /// # Errors
    ///
    /// - `RunError::NoInput` when both input lists are empty; nothing is written
    /// - an input file exists but cannot be read
    /// - the HTTP client cannot be built
    /// - an output file cannot be written
    ///
    /// Individual fetch failures are not errors: the affected records are
    /// produced with empty page metadata.
    pub async fn run_extraction(config: Config) -> Result<RunReport> {
        let start_time = std::time::Instant::now();

        let batch_ads = load_text_lines(&config.ads_file).await?;
        let start_urls = load_text_lines(&config.start_urls_file).await?;

        if batch_ads.is_empty() && start_urls.is_empty() {
            return Err(RunError::NoInput {
                ads_file: config.ads_file.display().to_string(),
                start_urls_file: config.start_urls_file.display().to_string(),
            }
            .into());
        }

        let settings = &config.settings;
        let mut ads_records: Vec<AdRecord> = Vec::new();
        let mut ads_path = None;

        if !batch_ads.is_empty() {
            info!("Processing {} ad URL(s)", batch_ads.len());
            let fetcher =
                HttpFetcher::new(settings).context("Failed to initialize HTTP client")?;
            let mut stats = ExtractionStats::new();
            ads_records = extract_from_ad_urls_with_stats(&batch_ads, &fetcher, &mut stats).await;
            stats.log_summary();

            save_ads_records(&ads_records, &settings.output.ads_json)
                .await
                .context("Failed to save ad records")?;
            ads_path = Some(settings.output.ads_json.clone());
        }

        let mut insights = None;
        let mut insights_path = None;
        if config.write_insights {
            info!("Computing insights");
            let report = build_insights(&ads_records, &start_urls);
            save_insights(&report, &settings.output.insights_json)
                .await
                .context("Failed to save insights")?;
            insights = Some(report);
            insights_path = Some(settings.output.insights_json.clone());
        }

        Ok(RunReport {
            ads_processed: ads_records.len(),
            search_urls: start_urls.len(),
            ads_path,
            insights,
            insights_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
