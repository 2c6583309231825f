//! Error categorization.
//!
//! This module maps `reqwest` failures onto the pipeline's [`FetchError`] taxonomy.

use std::error::Error as StdError;
use std::time::Duration;

use super::types::FetchError;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Categorizes a `reqwest::Error` into a [`FetchError`].
///
/// Status errors keep their code and builder errors (which only occur for URLs
/// `reqwest` refuses to send) count as invalid input. Connect failures,
/// including connect timeouts, are network errors. Only the request-level
/// timeout maps to `Timeout`, reporting the configured limit rounded up to whole
/// seconds. Everything else is a network failure.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `timeout` - The request timeout that was in effect
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout: Duration) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::HttpError {
            status: status.as_u16(),
        };
    }

    if error.is_connect() {
        FetchError::NetworkError {
            cause: describe_error_chain(error),
        }
    } else if error.is_timeout() {
        FetchError::Timeout {
            seconds: whole_seconds(timeout),
        }
    } else if error.is_builder() {
        FetchError::InvalidUrl {
            url: error
                .url()
                .map(|u| u.to_string())
                .unwrap_or_default(),
            reason: describe_error_chain(error),
        }
    } else {
        // request, redirect, body and decode failures
        FetchError::NetworkError {
            cause: describe_error_chain(error),
        }
    }
}

/// Rounds a timeout up to whole seconds so sub-second limits never read as 0.
fn whole_seconds(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

/// Flattens an error and its sources into one sanitized line.
///
/// `reqwest` keeps the interesting part ("dns error", "connection refused") in
/// the source chain, so the top-level message alone is rarely actionable.
pub fn describe_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = cause.source();
    }
    sanitize_and_truncate_error_message(&parts.join(": "))
}
