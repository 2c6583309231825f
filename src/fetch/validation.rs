//! URL validation.

use log::debug;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates the URL a run was asked to analyze.
///
/// Accepts only absolute `http`/`https` URLs with a host. Unlike a browser
/// address bar, no scheme is guessed: `example.com` is rejected so that the
/// caller learns exactly which page is being fetched.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` when the input is empty, longer than
/// `MAX_URL_LENGTH`, syntactically invalid, uses another scheme, or has no host.
pub fn validate_url(input: &str) -> Result<Url, FetchError> {
    let trimmed = input.trim();
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: trimmed.chars().take(100).collect(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty".to_string()));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "URL is longer than {MAX_URL_LENGTH} characters ({})",
            trimmed.len()
        )));
    }

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host".to_string()));
    }

    debug!("Validated URL: {parsed}");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(result: Result<Url, FetchError>) -> String {
        match result {
            Err(FetchError::InvalidUrl { reason, .. }) => reason,
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_url_accepts_https() {
        let url = validate_url("https://example.com/page?x=1").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/page");
    }

    #[test]
    fn test_validate_url_accepts_http_with_port() {
        let url = validate_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_validate_url_trims_whitespace() {
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_missing_scheme() {
        let reason = reason_of(validate_url("example.com"));
        assert!(reason.contains("relative URL"), "reason: {reason}");
    }

    #[test]
    fn test_validate_url_rejects_unsupported_scheme() {
        let reason = reason_of(validate_url("ftp://example.com/file"));
        assert!(reason.contains("ftp"));
    }

    #[test]
    fn test_validate_url_rejects_hostless_url() {
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_validate_url_rejects_empty() {
        assert_eq!(reason_of(validate_url("   ")), "URL is empty");
    }

    #[test]
    fn test_validate_url_rejects_overlong_url() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let reason = reason_of(validate_url(&long));
        assert!(reason.contains("longer than"));
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        assert!(validate_url("not a url at all!!!").is_err());
        assert!(validate_url("https://").is_err());
    }
}
