//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ADS_FILE, DEFAULT_SETTINGS_PATH, DEFAULT_START_URLS_FILE};
use crate::config::settings::Settings;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies. Logging is set
/// up by the caller before a run, so it is not part of this struct.
///
/// # Examples
///
/// ```no_run
/// use ads_insight::{Config, Settings};
/// use std::path::PathBuf;
///
/// let config = Config {
///     ads_file: PathBuf::from("ads.txt"),
///     settings: Settings::default(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File with ad URLs, one per line (missing file = no ads)
    pub ads_file: PathBuf,

    /// File with search URLs, one per line (missing file = no searches)
    pub start_urls_file: PathBuf,

    /// Whether to compute and write the insights output
    pub write_insights: bool,

    /// Fetcher and output settings (already merged with defaults)
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ads_file: PathBuf::from(DEFAULT_ADS_FILE),
            start_urls_file: PathBuf::from(DEFAULT_START_URLS_FILE),
            write_insights: true,
            settings: Settings::default(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Use the default input files under data/input/
/// ads_insight
///
/// # Explicit ad URL list, skip insights
/// ads_insight --ads-file ads.txt --no-insights
///
/// # Search URLs only, custom settings file
/// ads_insight -s searches.txt --config ./settings.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ads_insight",
    about = "Extracts ad metadata from ad-transparency URLs and aggregates insights."
)]
pub struct Opt {
    /// File containing ad URLs (one per line). Takes priority over --start-urls for insights.
    #[arg(short = 'a', long, value_parser)]
    pub ads_file: Option<PathBuf>,

    /// File containing ad-transparency search URLs (one per line).
    #[arg(short = 's', long = "start-urls", value_parser)]
    pub start_urls: Option<PathBuf>,

    /// Skip computing and writing insights.
    #[arg(long)]
    pub no_insights: bool,

    /// Settings file (JSON). Missing file means built-in defaults.
    #[arg(long, value_parser, default_value = DEFAULT_SETTINGS_PATH)]
    pub config: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the library configuration from CLI options and loaded settings.
    ///
    /// The logging options are not carried over; read them before calling this.
    pub fn into_config(self, settings: Settings) -> Config {
        Config {
            ads_file: self
                .ads_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ADS_FILE)),
            start_urls_file: self
                .start_urls
                .unwrap_or_else(|| PathBuf::from(DEFAULT_START_URLS_FILE)),
            write_insights: !self.no_insights,
            settings,
        }
    }
}
