//! Scoring types.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{BASIC_RULE_WEIGHT, SOCIAL_RULE_WEIGHT, TECHNICAL_RULE_WEIGHT};
use crate::parse::MetaFields;

/// Report section a check belongs to.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro)]
pub enum Category {
    /// Title, description, headings
    Basic,
    /// Open Graph and Twitter Card tags
    Social,
    /// Canonical, robots, images, language, viewport
    Technical,
}

impl Category {
    /// Human-readable section heading.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Basic => "Basic SEO",
            Category::Social => "Social Media",
            Category::Technical => "Technical SEO",
        }
    }

    /// Weight of each check in this category when computing the score.
    pub fn weight(&self) -> f64 {
        match self {
            Category::Basic => BASIC_RULE_WEIGHT,
            Category::Social => SOCIAL_RULE_WEIGHT,
            Category::Technical => TECHNICAL_RULE_WEIGHT,
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro)]
pub enum Severity {
    /// The check is satisfied
    Pass,
    /// The page works but could be improved
    Warning,
    /// Something important is missing or broken
    Fail,
}

impl Severity {
    /// Attention order: `Fail` first, `Pass` last.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Fail => 0,
            Severity::Warning => 1,
            Severity::Pass => 2,
        }
    }

    /// Fraction of a check's weight this outcome earns.
    pub fn credit(&self) -> f64 {
        match self {
            Severity::Pass => 1.0,
            Severity::Warning => 0.5,
            Severity::Fail => 0.0,
        }
    }

    /// Upper-case label for text output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Fail => "FAIL",
        }
    }
}

/// Result of one rule applied to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the check, e.g. "Title length"
    pub check: String,
    /// Section the check belongs to
    pub category: Category,
    /// Outcome
    pub severity: Severity,
    /// What was observed
    pub message: String,
    /// What to do about it, if anything
    pub recommendation: Option<String>,
    /// A critical failure caps the overall score
    #[serde(default)]
    pub critical: bool,
}

/// The scored result of analyzing one page.
///
/// Contains no timestamps or other run-dependent data: scoring the same
/// `MetaFields` twice yields equal reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Overall score, 0 to 100
    pub score: u8,
    /// One finding per rule, in rule order
    pub findings: Vec<Finding>,
    /// The metadata the findings were derived from
    pub fields: MetaFields,
}

impl Report {
    /// Findings of one category, in rule order.
    pub fn findings_in(&self, category: Category) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.category == category)
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    /// Whether any finding is critical.
    pub fn has_critical(&self) -> bool {
        self.findings.iter().any(|finding| finding.critical)
    }
}
