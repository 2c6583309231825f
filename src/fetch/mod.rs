//! Page fetching.
//!
//! This module performs the single network operation of an analysis run:
//! - URL validation (no request is sent for invalid input)
//! - One GET with browser-like headers, following redirects
//! - Mapping of every failure onto [`FetchError`]
//! - Body size capping before the document reaches the parser

mod request;
mod types;
mod validation;

use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{MAX_HTML_PREVIEW_CHARS, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, FetchError};
use request::RequestHeaders;

// Re-export public API
pub use types::PageDocument;
pub use validation::validate_url;

/// Fetches one page.
///
/// Validates `url`, sends a single GET through `client`, and returns the decoded
/// body of a 2xx response. Redirects are followed by the client's policy; the
/// final URL is recorded on the returned document. `timeout` bounds the whole
/// exchange including the body and is reported back in [`FetchError::Timeout`].
///
/// Non-HTML content types are logged and analyzed anyway: the extractor simply
/// finds nothing and the report says so.
///
/// # Errors
///
/// - `InvalidUrl` before any request is made
/// - `HttpError` for any non-2xx final status
/// - `Timeout` when `timeout` expires
/// - `NetworkError` for connection, DNS, TLS, redirect-loop or body failures
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<PageDocument, FetchError> {
    let parsed = validate_url(url)?;
    let requested_url = parsed.to_string();
    info!("Fetching {requested_url}");

    let response = RequestHeaders::apply_to_request_builder(client.get(parsed))
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| categorize_reqwest_error(&e, timeout))?;

    let status = response.status();
    let final_url = response.url().to_string();
    debug!("Final url after redirects: {final_url} (status {status})");

    if !status.is_success() {
        warn!("{final_url} answered with HTTP {status}");
        return Err(FetchError::HttpError {
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let body = response
        .text()
        .await
        .map_err(|e| categorize_reqwest_error(&e, timeout))?;
    let (html, truncated) = cap_body(body);

    let document = PageDocument {
        requested_url,
        final_url,
        status: status.as_u16(),
        content_type,
        html,
        truncated,
    };

    if !document.is_html() {
        warn!(
            "{} has non-HTML content-type {:?}; analyzing it anyway",
            document.final_url,
            document.content_type.as_deref().unwrap_or_default()
        );
    }
    if document.html.trim().is_empty() {
        warn!("{} returned an empty body", document.final_url);
    } else {
        let preview: String = document.html.chars().take(MAX_HTML_PREVIEW_CHARS).collect();
        debug!(
            "Body length for {}: {} bytes, preview: {preview}",
            document.final_url,
            document.html.len()
        );
    }

    Ok(document)
}

/// Cuts `body` to at most `MAX_RESPONSE_BODY_SIZE` bytes on a char boundary.
fn cap_body(mut body: String) -> (String, bool) {
    if body.len() <= MAX_RESPONSE_BODY_SIZE {
        return (body, false);
    }
    let original = body.len();
    let mut end = MAX_RESPONSE_BODY_SIZE;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
    warn!("Response body of {original} bytes truncated to {end} bytes before parsing");
    (body, true)
}
