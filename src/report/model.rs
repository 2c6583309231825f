//! Presentation model types.

use serde::Serialize;

use crate::config::{EXCELLENT_SCORE_THRESHOLD, GOOD_SCORE_THRESHOLD};
use crate::score::{Category, Finding, Severity};

/// Everything a presentation layer needs to show a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    /// Overall score, 0 to 100
    pub score: u8,
    /// Qualitative band of the score
    pub band: ScoreBand,
    /// Whether a critical failure capped the score
    pub has_critical: bool,
    /// Finding counts across all categories
    pub counts: SeverityCounts,
    /// One section per category, in display order
    pub sections: Vec<CategorySection>,
    /// Actions derived from Fail and Warning findings, most urgent first
    pub recommendations: Vec<Recommendation>,
    /// How the page may look as a search result
    pub search_preview: SearchPreview,
    /// How the page may look when shared on social media
    pub social_preview: SocialPreview,
}

/// Number of findings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    /// Pass findings
    pub passed: usize,
    /// Warning findings
    pub warnings: usize,
    /// Fail findings
    pub failed: usize,
}

impl SeverityCounts {
    pub(crate) fn tally<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        findings
            .into_iter()
            .fold(Self::default(), |mut counts, finding| {
                match finding.severity {
                    Severity::Pass => counts.passed += 1,
                    Severity::Warning => counts.warnings += 1,
                    Severity::Fail => counts.failed += 1,
                }
                counts
            })
    }
}

/// Findings of one category, sorted Fail, Warning, Pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    /// The category
    pub category: Category,
    /// Section heading
    pub label: &'static str,
    /// Counts within this section
    pub counts: SeverityCounts,
    /// Findings, most urgent first; ties keep rule order
    pub findings: Vec<Finding>,
}

/// Qualitative reading of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    /// `EXCELLENT_SCORE_THRESHOLD` and above
    Excellent,
    /// `GOOD_SCORE_THRESHOLD` and above
    Good,
    /// Below `GOOD_SCORE_THRESHOLD`
    NeedsWork,
}

impl ScoreBand {
    /// Band of `score`.
    pub fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_SCORE_THRESHOLD {
            ScoreBand::Excellent
        } else if score >= GOOD_SCORE_THRESHOLD {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs work",
        }
    }

    /// General advice for pages in this band.
    pub fn next_steps(&self) -> &'static [&'static str] {
        match self {
            ScoreBand::Excellent => &[
                "Monitor the page regularly so regressions are caught early",
                "Test how shared links render on the major social platforms",
                "Add structured data (schema.org) for rich search results",
            ],
            ScoreBand::Good => &[
                "Fix the high-priority items below first",
                "Fill in the missing Open Graph and Twitter Card tags",
                "Re-run the analysis after each change",
            ],
            ScoreBand::NeedsWork => &[
                "Start with the missing title, description and heading",
                "Make sure the page is not blocked from indexing",
                "Work through the recommendations in order, then re-run the analysis",
            ],
        }
    }
}

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    /// Derived from a Fail finding
    High,
    /// Derived from a Warning finding
    Medium,
}

impl Priority {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

/// One action the page owner should take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Urgency
    pub priority: Priority,
    /// Check the recommendation comes from
    pub check: String,
    /// Category of that check
    pub category: Category,
    /// The action
    pub text: String,
}

/// Approximation of a search result snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPreview {
    /// Title, truncated to `PREVIEW_TITLE_CHARS`
    pub title: Option<String>,
    /// Canonical URL, falling back to og:url
    pub url: Option<String>,
    /// Description, truncated to `PREVIEW_DESCRIPTION_CHARS`
    pub description: Option<String>,
}

/// Approximation of a social media link card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialPreview {
    /// og:title, falling back to twitter:title, then the title
    pub title: Option<String>,
    /// og:description, falling back to twitter:description, then the description
    pub description: Option<String>,
    /// og:image, falling back to twitter:image
    pub image: Option<String>,
    /// Twitter Card type
    pub card: Option<String>,
}
