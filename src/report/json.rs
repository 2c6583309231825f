//! JSON serialization and export.

use std::path::Path;

use log::info;

use crate::error_handling::ReportError;
use crate::score::Report;

/// Serializes a report as pretty-printed JSON.
///
/// Every metadata key is present; absent values are `null`.
///
/// # Errors
///
/// Returns `ReportError::Serialize` if encoding fails.
pub fn serialize(report: &Report) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(ReportError::Serialize)
}

/// Reads a report back from its JSON form.
///
/// `deserialize(&serialize(r)?)? == r` for every report.
///
/// # Errors
///
/// Returns `ReportError::Deserialize` if `json` is not a serialized report.
pub fn deserialize(json: &str) -> Result<Report, ReportError> {
    serde_json::from_str(json).map_err(ReportError::Deserialize)
}

/// Writes the JSON report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `ReportError::Serialize` or `ReportError::Io`.
pub fn export_json(report: &Report, path: &Path) -> Result<(), ReportError> {
    let json = serialize(report)?;
    std::fs::write(path, json + "\n").map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Report written to {}", path.display());
    Ok(())
}

/// Suggested export file name for a page, e.g. `seo_analysis_example.com.json`.
///
/// Characters that are awkward in file names (such as the `:` before a port)
/// become `_`. Inputs without a host fall back to `seo_analysis_page.json`.
pub fn default_export_file_name(page_url: &str) -> String {
    let host = url::Url::parse(page_url)
        .ok()
        .and_then(|url| {
            let host = url.host_str()?.to_string();
            Some(match url.port() {
                Some(port) => format!("{host}_{port}"),
                None => host,
            })
        })
        .unwrap_or_else(|| "page".to_string());

    let safe: String = host
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("seo_analysis_{safe}.json")
}
