//! The normalized metadata record.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// A single-valued text field of [`MetaFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TextField {
    /// `<title>` text
    Title,
    /// `<meta name="description">`
    Description,
    /// `<link rel="canonical">` href
    Canonical,
    /// `<meta property="og:title">`
    OgTitle,
    /// `<meta property="og:description">`
    OgDescription,
    /// `<meta property="og:image">`
    OgImage,
    /// `<meta property="og:type">`
    OgType,
    /// `<meta property="og:url">`
    OgUrl,
    /// `<meta name="twitter:card">`
    TwitterCard,
    /// `<meta name="twitter:title">`
    TwitterTitle,
    /// `<meta name="twitter:description">`
    TwitterDescription,
    /// `<meta name="twitter:image">`
    TwitterImage,
    /// `<meta name="robots">`
    Robots,
    /// `<html lang>`
    Lang,
    /// `<meta name="viewport">`
    Viewport,
    /// `<meta name="keywords">`
    Keywords,
}

impl TextField {
    /// The key this field is serialized under.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Description => "description",
            TextField::Canonical => "canonical",
            TextField::OgTitle => "og:title",
            TextField::OgDescription => "og:description",
            TextField::OgImage => "og:image",
            TextField::OgType => "og:type",
            TextField::OgUrl => "og:url",
            TextField::TwitterCard => "twitter:card",
            TextField::TwitterTitle => "twitter:title",
            TextField::TwitterDescription => "twitter:description",
            TextField::TwitterImage => "twitter:image",
            TextField::Robots => "robots",
            TextField::Lang => "lang",
            TextField::Viewport => "viewport",
            TextField::Keywords => "keywords",
        }
    }
}

/// SEO-relevant values extracted from one page.
///
/// Every key is always present in the serialized form; absence is `null`, never
/// a missing key. Text values are trimmed with internal whitespace collapsed,
/// and a value that is blank after trimming is recorded as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaFields {
    /// Document title
    pub title: Option<String>,
    /// Meta description
    pub description: Option<String>,
    /// Canonical URL, as written in the document
    pub canonical: Option<String>,
    /// Open Graph title
    #[serde(rename = "og:title")]
    pub og_title: Option<String>,
    /// Open Graph description
    #[serde(rename = "og:description")]
    pub og_description: Option<String>,
    /// Open Graph image URL
    #[serde(rename = "og:image")]
    pub og_image: Option<String>,
    /// Open Graph object type
    #[serde(rename = "og:type")]
    pub og_type: Option<String>,
    /// Open Graph URL
    #[serde(rename = "og:url")]
    pub og_url: Option<String>,
    /// Twitter Card type
    #[serde(rename = "twitter:card")]
    pub twitter_card: Option<String>,
    /// Twitter Card title
    #[serde(rename = "twitter:title")]
    pub twitter_title: Option<String>,
    /// Twitter Card description
    #[serde(rename = "twitter:description")]
    pub twitter_description: Option<String>,
    /// Twitter Card image URL
    #[serde(rename = "twitter:image")]
    pub twitter_image: Option<String>,
    /// Text of every `<h1>`, in document order (empty headings included)
    pub h1: Vec<String>,
    /// Number of `<img>` elements
    pub image_count: usize,
    /// Number of `<img>` elements with non-blank alt text
    pub images_with_alt: usize,
    /// `images_with_alt / image_count`; `None` when the page has no images
    pub image_alt_coverage: Option<f64>,
    /// Robots directives
    pub robots: Option<String>,
    /// Declared document language
    pub lang: Option<String>,
    /// Viewport declaration
    pub viewport: Option<String>,
    /// Meta keywords
    pub keywords: Option<String>,
}

impl MetaFields {
    /// The value of a text field, if present.
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    fn slot(&self, field: TextField) -> &Option<String> {
        match field {
            TextField::Title => &self.title,
            TextField::Description => &self.description,
            TextField::Canonical => &self.canonical,
            TextField::OgTitle => &self.og_title,
            TextField::OgDescription => &self.og_description,
            TextField::OgImage => &self.og_image,
            TextField::OgType => &self.og_type,
            TextField::OgUrl => &self.og_url,
            TextField::TwitterCard => &self.twitter_card,
            TextField::TwitterTitle => &self.twitter_title,
            TextField::TwitterDescription => &self.twitter_description,
            TextField::TwitterImage => &self.twitter_image,
            TextField::Robots => &self.robots,
            TextField::Lang => &self.lang,
            TextField::Viewport => &self.viewport,
            TextField::Keywords => &self.keywords,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: TextField) -> &mut Option<String> {
        match field {
            TextField::Title => &mut self.title,
            TextField::Description => &mut self.description,
            TextField::Canonical => &mut self.canonical,
            TextField::OgTitle => &mut self.og_title,
            TextField::OgDescription => &mut self.og_description,
            TextField::OgImage => &mut self.og_image,
            TextField::OgType => &mut self.og_type,
            TextField::OgUrl => &mut self.og_url,
            TextField::TwitterCard => &mut self.twitter_card,
            TextField::TwitterTitle => &mut self.twitter_title,
            TextField::TwitterDescription => &mut self.twitter_description,
            TextField::TwitterImage => &mut self.twitter_image,
            TextField::Robots => &mut self.robots,
            TextField::Lang => &mut self.lang,
            TextField::Viewport => &mut self.viewport,
            TextField::Keywords => &mut self.keywords,
        }
    }

    /// Number of `<h1>` headings.
    pub fn h1_count(&self) -> usize {
        self.h1.len()
    }
}
