//! Fetched page types.

/// A successfully fetched HTML page.
///
/// Only 2xx responses become a `PageDocument`; every other outcome of a fetch
/// is a [`crate::FetchError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    /// The URL the caller asked for, after validation
    pub requested_url: String,
    /// The URL that answered, after following redirects
    pub final_url: String,
    /// HTTP status of the final response
    pub status: u16,
    /// `Content-Type` header of the final response, if sent
    pub content_type: Option<String>,
    /// Decoded response body
    pub html: String,
    /// Whether the body was cut at `MAX_RESPONSE_BODY_SIZE`
    pub truncated: bool,
}

impl PageDocument {
    /// Whether the server declared the body to be HTML.
    ///
    /// A missing `Content-Type` counts as HTML; some servers never send one.
    pub fn is_html(&self) -> bool {
        self.content_type.as_deref().is_none_or(|ct| {
            let ct = ct.trim().to_ascii_lowercase();
            ct.starts_with("text/html") || ct.starts_with("application/xhtml+xml")
        })
    }

    /// Whether a redirect led to a different URL than the one requested.
    pub fn was_redirected(&self) -> bool {
        self.requested_url != self.final_url
    }
}
