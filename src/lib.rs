//! seo_audit library: single-page SEO metadata analysis
//!
//! This library fetches one web page, extracts its SEO-relevant metadata
//! (title, description, canonical URL, Open Graph and Twitter Card tags,
//! headings, image alt text, robots directives), scores it against a fixed rule
//! table, and presents the result.
//!
//! The pipeline runs strictly in order: fetch, parse, extract, score, report.
//! Only the fetch can fail; everything after it is pure and total.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let analysis = run_analysis(&config).await?;
//! println!("{} scored {}/100", analysis.final_url, analysis.report.score);
//! # Ok(())
//! # }
//! ```
//!
//! Already-fetched markup can be scored without any network access:
//!
//! ```
//! let report = seo_audit::analyze_html("<html><head><title>Hi</title></head></html>");
//! assert!(report.score < 100);
//! ```
//!
//! # Requirements
//!
//! The network entry points require a Tokio runtime. A single-threaded runtime
//! is enough: one analysis performs exactly one request.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
pub mod report;
pub mod score;
mod utils;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{FetchError, FetchErrorKind, InitializationError, ReportError};
pub use parse::MetaFields;
pub use report::{render, render_text, DisplayModel};
pub use run::{analyze_html, analyze_page, run_analysis, PageAnalysis};
pub use score::{Category, Finding, Report, Severity};

// Internal run module (wires the pipeline stages together)
mod run {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::error_handling::FetchError;
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::parse::{extract, parse};
    use crate::score::{score, Report};

    /// Result of analyzing one fetched page.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PageAnalysis {
        /// URL that was requested
        pub requested_url: String,
        /// URL that answered, after redirects
        pub final_url: String,
        /// HTTP status of the final response
        pub status: u16,
        /// `Content-Type` of the final response, if sent
        pub content_type: Option<String>,
        /// Whether the body was truncated before parsing
        pub truncated: bool,
        /// The scored report
        pub report: Report,
    }

    /// Parses, extracts and scores markup that has already been fetched.
    ///
    /// Never fails: malformed or non-HTML input yields a report full of
    /// missing-field findings.
    pub fn analyze_html(raw_html: &str) -> Report {
        let tree = parse(raw_html);
        let fields = extract(&tree);
        score(&fields)
    }

    /// Fetches `url` with `client` and analyzes the page.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the fetch stage. No partial report is
    /// produced on failure.
    pub async fn analyze_page(
        client: &reqwest::Client,
        url: &str,
        timeout: Duration,
    ) -> Result<PageAnalysis, FetchError> {
        let page = fetch_page(client, url, timeout).await?;
        let report = analyze_html(&page.html);
        info!(
            "Analyzed {} (HTTP {}): score {}/100, {} findings",
            page.final_url,
            page.status,
            report.score,
            report.findings.len()
        );

        Ok(PageAnalysis {
            requested_url: page.requested_url,
            final_url: page.final_url,
            status: page.status,
            content_type: page.content_type,
            truncated: page.truncated,
            report,
        })
    }

    /// Runs an analysis with the provided configuration.
    ///
    /// Validates the configuration, builds the HTTP client and analyzes
    /// `config.url`. Fetch failures keep their [`FetchError`] type inside the
    /// returned error, so callers can recover it with `downcast_ref`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be built, or the fetch fails.
    pub async fn run_analysis(config: &Config) -> Result<PageAnalysis> {
        config.validate()?;
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let analysis = analyze_page(&client, &config.url, config.timeout())
            .await
            .with_context(|| format!("Failed to analyze {}", config.url))?;
        Ok(analysis)
    }
}
