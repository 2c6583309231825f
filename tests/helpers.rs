// Shared test helpers for pages served by the mock server.

use std::time::Duration;

use seo_audit::Config;

/// A page that satisfies every rule.
#[allow(dead_code)] // Used by other test files
pub const WELL_TAGGED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Handmade Oak Furniture from a Yorkshire Workshop</title>
  <meta name="description" content="Solid oak tables, chairs and shelving built to order in our Yorkshire workshop. Free UK delivery.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://smithandsons.example/">
  <meta property="og:title" content="Handmade Oak Furniture">
  <meta property="og:description" content="Built to order in Yorkshire.">
  <meta property="og:image" content="https://smithandsons.example/og.jpg">
  <meta name="twitter:card" content="summary_large_image">
</head>
<body>
  <h1>Oak furniture, built to last</h1>
  <img src="/table.jpg" alt="Oak dining table">
</body>
</html>"#;

/// The same page, blocked from indexing.
#[allow(dead_code)] // Used by other test files
pub fn noindex_page() -> String {
    WELL_TAGGED_PAGE.replace(
        "<meta charset=\"utf-8\">",
        "<meta charset=\"utf-8\">\n  <meta name=\"robots\" content=\"noindex, follow\">",
    )
}

/// Configuration for analyzing `url` with a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_config(url: String) -> Config {
    Config {
        url,
        timeout_seconds: 2,
        user_agent: "seo-audit-test/1.0".to_string(),
        ..Config::default()
    }
}

/// A client matching `test_config`, for calling `analyze_page` directly.
#[allow(dead_code)] // Used by other test files
pub fn test_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent("seo-audit-test/1.0")
        .build()
        .expect("Failed to create client")
}
