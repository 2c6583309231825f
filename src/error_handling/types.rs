//! Error type definitions.
//!
//! This module defines the error taxonomy of the analysis pipeline plus the
//! errors raised while setting up logging or writing reports.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

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

/// Terminal failure of the fetch stage.
///
/// Once a page has been fetched nothing else in the pipeline can fail, so this
/// is the only error an analysis run reports. No partial report is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The input is not a well-formed absolute http(s) URL. No request was sent.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {seconds}s")]
    Timeout {
        /// The timeout that expired
        seconds: u64,
    },

    /// Connection, DNS, TLS or transfer failure.
    #[error("Network error: {cause}")]
    NetworkError {
        /// Sanitized description of the underlying error chain
        cause: String,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP error: status {status}")]
    HttpError {
        /// The HTTP status code
        status: u16,
    },
}

/// Coarse classification of a [`FetchError`], used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// See [`FetchError::InvalidUrl`]
    InvalidUrl,
    /// See [`FetchError::Timeout`]
    Timeout,
    /// See [`FetchError::NetworkError`]
    NetworkError,
    /// See [`FetchError::HttpError`]
    HttpError,
}

impl FetchErrorKind {
    /// Returns a stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "invalid_url",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::NetworkError => "network_error",
            FetchErrorKind::HttpError => "http_error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    /// The kind of this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
            FetchError::NetworkError { .. } => FetchErrorKind::NetworkError,
            FetchError::HttpError { .. } => FetchErrorKind::HttpError,
        }
    }

    /// A plain-language message for a non-technical user.
    ///
    /// Each kind gets its own wording so "the URL looks invalid" is never
    /// confused with "the site could not be reached".
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidUrl { .. } => {
                "The URL looks invalid. Enter the full address, including http:// or https://."
                    .to_string()
            }
            FetchError::Timeout { seconds } => {
                let unit = if *seconds == 1 { "second" } else { "seconds" };
                format!(
                    "The site took too long to respond (more than {seconds} {unit}). Try again later."
                )
            }
            FetchError::NetworkError { .. } => {
                "Could not reach the site. Check the address and your internet connection."
                    .to_string()
            }
            FetchError::HttpError { status } => {
                let reason = reqwest::StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("Unknown Status Code");
                format!(
                    "The site answered with HTTP {status} ({reason}), so the page could not be analyzed."
                )
            }
        }
    }
}

/// Error types for report serialization and export.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report could not be encoded as JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input is not a valid serialized report.
    #[error("Failed to deserialize report: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The export file could not be written.
    #[error("Failed to write report to {path}: {source}")]
    Io {
        /// Destination path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
