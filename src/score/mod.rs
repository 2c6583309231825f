//! Rule-based scoring.
//!
//! This module turns [`MetaFields`] into a [`Report`]:
//! - Every rule in the rule table yields exactly one [`Finding`]
//! - The score is the weighted share of credit earned across all findings
//! - A critical failure (such as `noindex`) caps the score
//!
//! Scoring is pure: the same fields always produce an equal report.

mod rules;
mod types;

use log::debug;

use crate::config::CRITICAL_SCORE_CEILING;
use crate::parse::MetaFields;

// Re-export public API
pub use types::{Category, Finding, Report, Severity};

/// Applies every rule to `fields` and computes the overall score.
pub fn score(fields: &MetaFields) -> Report {
    let findings: Vec<Finding> = rules::RULES
        .iter()
        .map(|rule| rule.apply(fields))
        .collect();
    let score = compute_score(&findings);

    debug!(
        "Scored {} findings: {} pass, {} warning, {} fail, score {score}",
        findings.len(),
        findings.iter().filter(|f| f.severity == Severity::Pass).count(),
        findings.iter().filter(|f| f.severity == Severity::Warning).count(),
        findings.iter().filter(|f| f.severity == Severity::Fail).count(),
    );

    Report {
        score,
        findings,
        fields: fields.clone(),
    }
}

/// Computes a 0-100 score from findings.
///
/// Each finding contributes its category weight times its severity credit
/// (Pass 1, Warning 0.5, Fail 0); the total is divided by the sum of weights
/// and rounded. Any critical finding caps the result at `CRITICAL_SCORE_CEILING`.
/// An empty list scores 0.
pub fn compute_score(findings: &[Finding]) -> u8 {
    let (earned, possible) = findings.iter().fold((0.0, 0.0), |(earned, possible), f| {
        let weight = f.category.weight();
        (earned + weight * f.severity.credit(), possible + weight)
    });

    if possible <= 0.0 {
        return 0;
    }

    let raw = (earned / possible * 100.0).round().clamp(0.0, 100.0) as u8;
    if findings.iter().any(|f| f.critical) {
        raw.min(CRITICAL_SCORE_CEILING)
    } else {
        raw
    }
}
