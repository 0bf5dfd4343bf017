//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON or has wrongly typed keys.
    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned by a page fetch after the retry policy gave up.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed or uses a scheme other than http/https.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// URL as given
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP request or body download failed.
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        /// URL as requested
        url: String,
        /// Underlying reqwest error
        #[source]
        source: ReqwestError,
    },
}

impl FetchError {
    /// Category of this error, used for retry decisions and statistics.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            FetchError::Http { source, .. } => categorize_reqwest_error(source),
        }
    }

    /// Whether another attempt could succeed.
    pub fn is_transient(&self) -> bool {
        !matches!(
            self.kind(),
            FetchErrorKind::InvalidUrl | FetchErrorKind::Builder | FetchErrorKind::Redirect
        )
    }
}

/// Categories of fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FetchErrorKind {
    /// Unparseable URL or unsupported scheme
    InvalidUrl,
    /// Request could not be built
    Builder,
    /// Request timed out
    Timeout,
    /// Connection could not be established
    Connect,
    /// Too many redirects
    Redirect,
    /// Request failed while sending
    Request,
    /// Response body could not be read
    Body,
    /// Response body could not be decoded
    Decode,
    /// Anything else
    Other,
}

/// Fatal run-level errors.
#[derive(Error, Debug)]
pub enum RunError {
    /// Neither input file contained any URL.
    #[error(
        "No input provided. Provide ad URLs in {ads_file} or search URLs in {start_urls_file}, \
         or pass --ads-file/--start-urls."
    )]
    NoInput {
        /// Ad URL list that was read
        ads_file: String,
        /// Search URL list that was read
        start_urls_file: String,
    },
}
