//! Snippet previews.

use crate::config::{PREVIEW_DESCRIPTION_CHARS, PREVIEW_TITLE_CHARS};
use crate::parse::MetaFields;

use super::model::{SearchPreview, SocialPreview};

// Cut at a space only when it keeps at least this share of the limit
const WORD_BOUNDARY_MIN_SHARE: f64 = 0.8;

/// Truncates `text` to `limit` characters for display, appending "...".
///
/// Runs of whitespace are collapsed to one space first. Prefers to cut at the last space when that space lies past 80% of the
/// limit, so words are not chopped in half unless the text has no late space.
pub fn truncate_for_preview(text: &str, limit: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= limit {
        return text;
    }

    let head: String = text.chars().take(limit).collect();
    let cut = match head.rfind(' ') {
        Some(pos) if head[..pos].chars().count() as f64 > limit as f64 * WORD_BOUNDARY_MIN_SHARE => {
            &head[..pos]
        }
        _ => head.as_str(),
    };
    format!("{cut}...")
}

pub(crate) fn search_preview(fields: &MetaFields) -> SearchPreview {
    SearchPreview {
        title: fields
            .title
            .as_deref()
            .map(|title| truncate_for_preview(title, PREVIEW_TITLE_CHARS)),
        url: fields.canonical.clone().or_else(|| fields.og_url.clone()),
        description: fields
            .description
            .as_deref()
            .map(|description| truncate_for_preview(description, PREVIEW_DESCRIPTION_CHARS)),
    }
}

pub(crate) fn social_preview(fields: &MetaFields) -> SocialPreview {
    let first = |candidates: [&Option<String>; 3]| candidates.into_iter().flatten().next().cloned();

    SocialPreview {
        title: first([&fields.og_title, &fields.twitter_title, &fields.title]),
        description: first([
            &fields.og_description,
            &fields.twitter_description,
            &fields.description,
        ]),
        image: fields.og_image.clone().or_else(|| fields.twitter_image.clone()),
        card: fields.twitter_card.clone(),
    }
}
