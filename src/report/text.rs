//! Plain-text rendering.
//!
//! Colors come from `colored`, which disables itself when stdout is not a
//! terminal or `NO_COLOR` is set; `--no-color` forces it off.

use std::fmt::Write;

use colored::*;

use super::model::{DisplayModel, Priority, ScoreBand, SeverityCounts};
use crate::score::Severity;

const BAR_WIDTH: usize = 20;

/// Renders a display model as a human-readable report.
pub fn render_text(model: &DisplayModel) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, model);
    out
}

fn write_report(out: &mut String, model: &DisplayModel) -> std::fmt::Result {
    writeln!(
        out,
        "{} {}  {}",
        "SEO score:".bold(),
        paint_band(&format!("{}/100", model.score), model.band).bold(),
        paint_band(model.band.label(), model.band)
    )?;
    writeln!(out, "{}", score_bar(model.score, model.band))?;
    writeln!(out, "{}", counts_line(&model.counts))?;
    if model.has_critical {
        writeln!(
            out,
            "{}",
            "A critical issue caps this score until it is fixed.".red()
        )?;
    }

    for section in &model.sections {
        writeln!(out)?;
        writeln!(
            out,
            "{}  {}",
            section.label.bold().underline(),
            counts_line(&section.counts).dimmed()
        )?;
        for finding in &section.findings {
            writeln!(
                out,
                "  {} {}: {}",
                paint_severity(finding.severity),
                finding.check.bold(),
                finding.message
            )?;
            if finding.severity != Severity::Pass {
                if let Some(recommendation) = &finding.recommendation {
                    writeln!(out, "         -> {recommendation}")?;
                }
            }
        }
    }

    if !model.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Recommendations".bold().underline())?;
        for (i, recommendation) in model.recommendations.iter().enumerate() {
            let priority = match recommendation.priority {
                Priority::High => recommendation.priority.label().red().bold(),
                Priority::Medium => recommendation.priority.label().yellow(),
            };
            writeln!(
                out,
                "  {:>2}. [{}] {}: {}",
                i + 1,
                priority,
                recommendation.check,
                recommendation.text
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Search preview".bold().underline())?;
    let search = &model.search_preview;
    writeln!(
        out,
        "  {}",
        search.title.as_deref().unwrap_or("(no title)").blue()
    )?;
    if let Some(url) = &search.url {
        writeln!(out, "  {}", url.green())?;
    }
    writeln!(
        out,
        "  {}",
        search.description.as_deref().unwrap_or("(no description)")
    )?;

    writeln!(out)?;
    writeln!(out, "{}", "Social preview".bold().underline())?;
    let social = &model.social_preview;
    writeln!(
        out,
        "  {}",
        social.title.as_deref().unwrap_or("(no title)").bold()
    )?;
    writeln!(
        out,
        "  {}",
        social.description.as_deref().unwrap_or("(no description)")
    )?;
    writeln!(
        out,
        "  image: {}  card: {}",
        social.image.as_deref().unwrap_or("none"),
        social.card.as_deref().unwrap_or("none")
    )?;

    writeln!(out)?;
    writeln!(out, "{}", "Next steps".bold().underline())?;
    for step in model.band.next_steps() {
        writeln!(out, "  - {step}")?;
    }

    Ok(())
}

fn paint_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::Pass => severity.as_str().green(),
        Severity::Warning => severity.as_str().yellow(),
        Severity::Fail => severity.as_str().red().bold(),
    }
}

fn paint_band(text: &str, band: ScoreBand) -> ColoredString {
    match band {
        ScoreBand::Excellent => text.green(),
        ScoreBand::Good => text.yellow(),
        ScoreBand::NeedsWork => text.red(),
    }
}

fn score_bar(score: u8, band: ScoreBand) -> String {
    let filled = usize::from(score) * BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        paint_band(&"#".repeat(filled), band),
        "-".repeat(BAR_WIDTH - filled).dimmed()
    )
}

fn counts_line(counts: &SeverityCounts) -> String {
    format!(
        "{} passed, {} warnings, {} failed",
        counts.passed, counts.warnings, counts.failed
    )
}
