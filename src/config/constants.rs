//! Configuration constants.
//!
//! This module defines the constants used throughout the analyzer: network
//! timeouts, size limits, and the numeric thresholds and weights of the scoring
//! rule table.

// Network operation timeouts
/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Largest timeout a caller may configure
pub const MAX_TIMEOUT_SECS: u64 = 120;
/// TCP connection timeout in seconds
/// Kept below the request timeout so unroutable hosts fail fast instead of
/// consuming the whole budget
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current desktop Chrome build so that sites which block obvious bots
/// still serve their regular markup. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Request and response limits
/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum response body size in bytes (2MB)
/// Larger bodies are truncated before parsing; the head of the document, where
/// the metadata lives, is always kept
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum HTML preview length in characters for debug logging
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;
/// Maximum error message length in characters
/// Error messages longer than this are truncated with a note about the original length
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// Length thresholds (counted in characters)
/// Titles shorter than this are flagged as too short
pub const TITLE_MIN_CHARS: usize = 30;
/// Titles longer than this may be truncated in search results
pub const TITLE_MAX_CHARS: usize = 60;
/// Meta descriptions shorter than this are flagged as too short
pub const DESCRIPTION_MIN_CHARS: usize = 70;
/// Meta descriptions longer than this may be truncated in search results
pub const DESCRIPTION_MAX_CHARS: usize = 160;
/// Open Graph titles longer than this are cut off in share cards
pub const OG_TITLE_MAX_CHARS: usize = 95;
/// Open Graph descriptions longer than this are cut off in share cards
pub const OG_DESCRIPTION_MAX_CHARS: usize = 300;
/// Image alt coverage below this ratio produces a warning
pub const IMAGE_ALT_MIN_COVERAGE: f64 = 0.5;

// Scoring
/// Weight of a Basic SEO rule
pub const BASIC_RULE_WEIGHT: f64 = 3.0;
/// Weight of a Technical rule
pub const TECHNICAL_RULE_WEIGHT: f64 = 2.0;
/// Weight of a Social rule
pub const SOCIAL_RULE_WEIGHT: f64 = 1.0;
/// Highest score a report can reach while it carries a critical failure
pub const CRITICAL_SCORE_CEILING: u8 = 40;
/// Lowest score in the "Excellent" band
pub const EXCELLENT_SCORE_THRESHOLD: u8 = 80;
/// Lowest score in the "Good" band
pub const GOOD_SCORE_THRESHOLD: u8 = 60;

// Preview truncation
/// Characters of title shown in a search-result preview
pub const PREVIEW_TITLE_CHARS: usize = 60;
/// Characters of description shown in a search-result preview
pub const PREVIEW_DESCRIPTION_CHARS: usize = 160;
