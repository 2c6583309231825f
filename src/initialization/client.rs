//! HTTP client initialization.

use std::time::Duration;

use reqwest::{redirect::Policy, ClientBuilder};

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the page fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Whole-request timeout from the configuration
/// - A TCP connect timeout capped at `TCP_CONNECT_TIMEOUT_SECS`
/// - Redirect following (up to `MAX_REDIRECT_HOPS` hops)
/// - Transparent gzip, brotli and deflate decoding
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let timeout = config.timeout();
    let connect_timeout = timeout.min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));

    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(client)
}
