//! Field extraction.

use super::fields::{MetaFields, TextField};
use super::index::PageIndex;
use super::ParsedTree;

/// Where in the document a text field is read from.
#[derive(Debug, Clone, Copy)]
enum Lookup {
    Title,
    HtmlLang,
    MetaName(&'static str),
    MetaProperty(&'static str),
    LinkRel(&'static str),
}

impl Lookup {
    fn resolve(self, index: &PageIndex) -> Option<String> {
        match self {
            Lookup::Title => index.title.clone(),
            Lookup::HtmlLang => index.html_lang.clone(),
            Lookup::MetaName(name) => index.meta_name(name).map(str::to_string),
            Lookup::MetaProperty(property) => index.meta_property(property).map(str::to_string),
            Lookup::LinkRel(rel) => index.link_rel(rel).map(str::to_string),
        }
    }
}

// One entry per TextField; keys are lowercase
const FIELD_LOOKUPS: &[(TextField, Lookup)] = &[
    (TextField::Title, Lookup::Title),
    (TextField::Description, Lookup::MetaName("description")),
    (TextField::Canonical, Lookup::LinkRel("canonical")),
    (TextField::OgTitle, Lookup::MetaProperty("og:title")),
    (TextField::OgDescription, Lookup::MetaProperty("og:description")),
    (TextField::OgImage, Lookup::MetaProperty("og:image")),
    (TextField::OgType, Lookup::MetaProperty("og:type")),
    (TextField::OgUrl, Lookup::MetaProperty("og:url")),
    (TextField::TwitterCard, Lookup::MetaName("twitter:card")),
    (TextField::TwitterTitle, Lookup::MetaName("twitter:title")),
    (TextField::TwitterDescription, Lookup::MetaName("twitter:description")),
    (TextField::TwitterImage, Lookup::MetaName("twitter:image")),
    (TextField::Robots, Lookup::MetaName("robots")),
    (TextField::Lang, Lookup::HtmlLang),
    (TextField::Viewport, Lookup::MetaName("viewport")),
    (TextField::Keywords, Lookup::MetaName("keywords")),
];

/// Extracts the SEO metadata of a parsed page.
///
/// Pure and total: a document without any of the looked-up elements yields a
/// record where every text field is `None`, `h1` is empty and image counts are
/// zero.
pub fn extract(tree: &ParsedTree) -> MetaFields {
    let index = PageIndex::build(tree.document());

    let mut fields = MetaFields::default();
    for (field, lookup) in FIELD_LOOKUPS {
        *fields.slot_mut(*field) = lookup.resolve(&index);
    }

    fields.h1 = index.h1;
    fields.image_count = index.image_count;
    fields.images_with_alt = index.images_with_alt;
    fields.image_alt_coverage = (index.image_count > 0)
        .then(|| index.images_with_alt as f64 / index.image_count as f64);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_text_field_has_exactly_one_lookup() {
        let mapped: Vec<TextField> = FIELD_LOOKUPS.iter().map(|(field, _)| *field).collect();
        let unique: HashSet<TextField> = mapped.iter().copied().collect();
        assert_eq!(mapped.len(), unique.len(), "duplicate lookup entry");
        for field in TextField::iter() {
            assert!(unique.contains(&field), "{} has no lookup", field.as_str());
        }
    }

    #[test]
    fn test_lookup_keys_are_lowercase() {
        for (field, lookup) in FIELD_LOOKUPS {
            let key = match lookup {
                Lookup::MetaName(key) | Lookup::MetaProperty(key) | Lookup::LinkRel(key) => key,
                Lookup::Title | Lookup::HtmlLang => continue,
            };
            assert_eq!(*key, key.to_ascii_lowercase(), "{}", field.as_str());
        }
    }
}
