//! Report presentation.
//!
//! This module provides:
//! - [`render`]: the presentation-ready [`DisplayModel`] of a report
//! - [`render_text`]: a colored, human-readable rendering of that model
//! - JSON serialization, deserialization and file export
//!
//! Rendering never changes the findings themselves; it only groups, sorts and
//! counts them.

mod json;
mod model;
mod preview;
mod text;

use strum::IntoEnumIterator;

use crate::score::{Category, Report, Severity};

// Re-export public API
pub use json::{default_export_file_name, deserialize, export_json, serialize};
pub use model::{
    CategorySection, DisplayModel, Priority, Recommendation, ScoreBand, SearchPreview,
    SeverityCounts, SocialPreview,
};
pub use preview::truncate_for_preview;
pub use text::render_text;

/// Builds the presentation model of a report.
pub fn render(report: &Report) -> DisplayModel {
    let sections = Category::iter()
        .map(|category| {
            let mut findings: Vec<_> = report.findings_in(category).cloned().collect();
            // Stable: equal severities keep rule order
            findings.sort_by_key(|finding| finding.severity.rank());
            CategorySection {
                category,
                label: category.label(),
                counts: SeverityCounts::tally(&findings),
                findings,
            }
        })
        .collect();

    let mut recommendations: Vec<Recommendation> = report
        .findings
        .iter()
        .filter_map(|finding| {
            let priority = match finding.severity {
                Severity::Fail => Priority::High,
                Severity::Warning => Priority::Medium,
                Severity::Pass => return None,
            };
            Some(Recommendation {
                priority,
                check: finding.check.clone(),
                category: finding.category,
                text: finding.recommendation.clone()?,
            })
        })
        .collect();
    recommendations.sort_by_key(|recommendation| recommendation.priority == Priority::Medium);

    DisplayModel {
        score: report.score,
        band: ScoreBand::from_score(report.score),
        has_critical: report.has_critical(),
        counts: SeverityCounts::tally(&report.findings),
        sections,
        recommendations,
        search_preview: preview::search_preview(&report.fields),
        social_preview: preview::social_preview(&report.fields),
    }
}
