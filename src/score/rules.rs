//! The rule table.
//!
//! Each rule reads [`MetaFields`] and produces exactly one outcome. The table
//! fixes every rule's category, so a finding can never land in two sections.

use super::types::{Category, Finding, Severity};
use crate::config::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, IMAGE_ALT_MIN_COVERAGE,
    OG_DESCRIPTION_MAX_CHARS, OG_TITLE_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::parse::MetaFields;

/// What a rule observed, before it is tagged with the rule's name and category.
#[derive(Debug)]
struct Outcome {
    severity: Severity,
    message: String,
    recommendation: Option<String>,
    critical: bool,
}

impl Outcome {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Pass,
            message: message.into(),
            recommendation: None,
            critical: false,
        }
    }

    fn warning(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            recommendation: Some(recommendation.into()),
            critical: false,
        }
    }

    fn fail(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fail,
            message: message.into(),
            recommendation: Some(recommendation.into()),
            critical: false,
        }
    }

    fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    fn critical(mut self) -> Self {
        self.critical = true;
        self
    }
}

pub(crate) struct Rule {
    pub(crate) check: &'static str,
    pub(crate) category: Category,
    evaluate: fn(&MetaFields) -> Outcome,
}

impl Rule {
    pub(crate) fn apply(&self, fields: &MetaFields) -> Finding {
        let outcome = (self.evaluate)(fields);
        Finding {
            check: self.check.to_string(),
            category: self.category,
            severity: outcome.severity,
            message: outcome.message,
            recommendation: outcome.recommendation,
            critical: outcome.critical,
        }
    }
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        check: "Title length",
        category: Category::Basic,
        evaluate: title_length,
    },
    Rule {
        check: "Description length",
        category: Category::Basic,
        evaluate: description_length,
    },
    Rule {
        check: "Single H1",
        category: Category::Basic,
        evaluate: single_h1,
    },
    Rule {
        check: "Meta keywords",
        category: Category::Basic,
        evaluate: meta_keywords,
    },
    Rule {
        check: "Open Graph title",
        category: Category::Social,
        evaluate: og_title,
    },
    Rule {
        check: "Open Graph description",
        category: Category::Social,
        evaluate: og_description,
    },
    Rule {
        check: "Open Graph image",
        category: Category::Social,
        evaluate: og_image,
    },
    Rule {
        check: "Twitter Card",
        category: Category::Social,
        evaluate: twitter_card,
    },
    Rule {
        check: "Canonical URL",
        category: Category::Technical,
        evaluate: canonical,
    },
    Rule {
        check: "Robots directive",
        category: Category::Technical,
        evaluate: robots,
    },
    Rule {
        check: "Image alt text",
        category: Category::Technical,
        evaluate: image_alt_text,
    },
    Rule {
        check: "Language",
        category: Category::Technical,
        evaluate: language,
    },
    Rule {
        check: "Viewport",
        category: Category::Technical,
        evaluate: viewport,
    },
];

/// Length check shared by title and description.
///
/// Absence is a failure on its own; the length bounds only apply to values
/// that exist. Length is counted in characters, not bytes.
fn length_outcome(subject: &str, value: Option<&str>, min: usize, max: usize) -> Outcome {
    let noun = subject.to_lowercase();
    let Some(value) = value else {
        return Outcome::fail(
            format!("{subject} is missing"),
            format!("Add a {noun} of {min}-{max} characters that summarizes the page"),
        );
    };

    let length = value.chars().count();
    if length < min {
        Outcome::warning(
            format!("{subject} is too short ({length} characters)"),
            format!("Expand the {noun} to {min}-{max} characters"),
        )
    } else if length > max {
        Outcome::warning(
            format!(
                "{subject} is too long ({length} characters) and may be truncated in search results"
            ),
            format!("Shorten the {noun} to {max} characters or fewer"),
        )
    } else {
        Outcome::pass(format!("{subject} length is good ({length} characters)"))
    }
}

fn title_length(fields: &MetaFields) -> Outcome {
    length_outcome(
        "Title",
        fields.title.as_deref(),
        TITLE_MIN_CHARS,
        TITLE_MAX_CHARS,
    )
}

fn description_length(fields: &MetaFields) -> Outcome {
    length_outcome(
        "Meta description",
        fields.description.as_deref(),
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    )
}

fn single_h1(fields: &MetaFields) -> Outcome {
    match fields.h1_count() {
        0 => Outcome::fail(
            "No <h1> heading found",
            "Add exactly one <h1> that states the topic of the page",
        ),
        1 => Outcome::pass("Page has a single <h1> heading"),
        n => Outcome::warning(
            format!("Found {n} <h1> headings"),
            "Keep one <h1> and use <h2>-<h6> for subsections",
        ),
    }
}

fn meta_keywords(fields: &MetaFields) -> Outcome {
    match fields.keywords {
        Some(_) => Outcome::warning(
            "Meta keywords tag found",
            "Remove the meta keywords tag; search engines ignore it and it reveals your targeting to competitors",
        ),
        None => Outcome::pass("No meta keywords tag"),
    }
}

/// Presence check for a recommended tag.
fn recommended(value: Option<&str>, subject: &str, recommendation: &str) -> Outcome {
    match value {
        Some(_) => Outcome::pass(format!("{subject} is present")),
        None => Outcome::warning(format!("{subject} is missing"), recommendation),
    }
}

/// Open Graph text tags: missing or longer than `max` characters is a warning.
fn social_text(value: Option<&str>, subject: &str, max: usize, recommendation: &str) -> Outcome {
    let Some(value) = value else {
        return Outcome::warning(format!("{subject} is missing"), recommendation);
    };

    let length = value.chars().count();
    if length > max {
        Outcome::warning(
            format!("{subject} is too long ({length} characters)"),
            format!("Keep the {subject} to {max} characters or fewer"),
        )
    } else {
        Outcome::pass(format!("{subject} is present ({length} characters)"))
    }
}

fn og_title(fields: &MetaFields) -> Outcome {
    social_text(
        fields.og_title.as_deref(),
        "Open Graph title",
        OG_TITLE_MAX_CHARS,
        "Add <meta property=\"og:title\"> so shared links show a proper headline",
    )
}

fn og_description(fields: &MetaFields) -> Outcome {
    social_text(
        fields.og_description.as_deref(),
        "Open Graph description",
        OG_DESCRIPTION_MAX_CHARS,
        "Add <meta property=\"og:description\"> so shared links show a summary",
    )
}

fn og_image(fields: &MetaFields) -> Outcome {
    match fields.og_image {
        Some(_) => Outcome::pass("Open Graph image is present")
            .with_recommendation("Make sure the image is 1200x630px for the best display"),
        None => Outcome::warning(
            "Open Graph image is missing",
            "Add <meta property=\"og:image\"> (1200x630px works best) so shared links show a preview image",
        ),
    }
}

fn twitter_card(fields: &MetaFields) -> Outcome {
    match fields.twitter_card.as_deref() {
        Some(card) => Outcome::pass(format!("Twitter Card type is \"{card}\"")),
        None => Outcome::warning(
            "Twitter Card type is missing",
            "Add <meta name=\"twitter:card\" content=\"summary_large_image\">",
        ),
    }
}

fn canonical(fields: &MetaFields) -> Outcome {
    recommended(
        fields.canonical.as_deref(),
        "Canonical URL",
        "Add <link rel=\"canonical\"> to prevent duplicate content issues",
    )
}

fn robots(fields: &MetaFields) -> Outcome {
    match fields.robots.as_deref() {
        None => Outcome::pass("No robots meta tag; search engines index the page by default"),
        Some(directive) if directive.to_lowercase().contains("noindex") => Outcome::fail(
            format!("Page is blocked from search results (robots: \"{directive}\")"),
            "Remove noindex from the robots meta tag if this page should appear in search results",
        )
        .critical(),
        Some(directive) => Outcome::pass(format!("Robots directive allows indexing (\"{directive}\")")),
    }
}

fn image_alt_text(fields: &MetaFields) -> Outcome {
    let Some(coverage) = fields.image_alt_coverage else {
        return Outcome::pass("No images found on the page");
    };

    let total = fields.image_count;
    let with_alt = fields.images_with_alt;
    let percent = (coverage * 100.0).round();

    if coverage < IMAGE_ALT_MIN_COVERAGE {
        Outcome::warning(
            format!("Only {with_alt} of {total} images have alt text ({percent}%)"),
            "Add descriptive alt text to images for accessibility and image search",
        )
    } else if with_alt == total {
        Outcome::pass(format!("All {total} images have alt text"))
    } else {
        Outcome::pass(format!("{with_alt} of {total} images have alt text ({percent}%)"))
            .with_recommendation(format!(
                "Add alt text to the remaining {} images",
                total - with_alt
            ))
    }
}

fn language(fields: &MetaFields) -> Outcome {
    match fields.lang.as_deref() {
        Some(lang) => Outcome::pass(format!("Language is declared as \"{lang}\"")),
        None => Outcome::warning(
            "Language declaration is missing",
            "Add a lang attribute to the <html> tag, e.g. <html lang=\"en\">",
        ),
    }
}

fn viewport(fields: &MetaFields) -> Outcome {
    recommended(
        fields.viewport.as_deref(),
        "Viewport meta tag",
        "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> for mobile devices",
    )
}
