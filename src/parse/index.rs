//! Single-pass document index.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{ElementRef, Html, Selector};

use crate::utils::parse_selector_unsafe;

// Every element the extractor reads, in one selector so the tree is walked once
const INDEX_SELECTOR_STR: &str = "html, title, meta, link, h1, img";

static INDEX_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(INDEX_SELECTOR_STR, "INDEX_SELECTOR"));

/// What one traversal of the document found.
///
/// For keyed values (meta by name or property, link by rel) the first element
/// in document order with a non-blank value wins. Keys are stored lowercased.
#[derive(Debug, Default)]
pub(crate) struct PageIndex {
    pub(crate) title: Option<String>,
    pub(crate) html_lang: Option<String>,
    pub(crate) h1: Vec<String>,
    pub(crate) image_count: usize,
    pub(crate) images_with_alt: usize,
    meta_names: HashMap<String, String>,
    meta_properties: HashMap<String, String>,
    link_rels: HashMap<String, String>,
}

impl PageIndex {
    pub(crate) fn build(document: &Html) -> Self {
        let mut index = Self::default();

        for element in document.select(&INDEX_SELECTOR) {
            let node = element.value();
            match node.name() {
                "html" => {
                    if index.html_lang.is_none() {
                        index.html_lang = clean(node.attr("lang"));
                    }
                }
                "title" => {
                    // <svg><title> is a tooltip, not the document title
                    if index.title.is_none() && !inside_svg(&element) {
                        index.title = clean(Some(&element.text().collect::<String>()));
                    }
                }
                "meta" => index.record_meta(node),
                "link" => index.record_link(node),
                "h1" => index
                    .h1
                    .push(collapse_whitespace(&element.text().collect::<String>())),
                "img" => {
                    index.image_count += 1;
                    if clean(node.attr("alt")).is_some() {
                        index.images_with_alt += 1;
                    }
                }
                _ => {}
            }
        }

        log::debug!(
            "Indexed {} meta names, {} meta properties, {} link rels, {} h1, {} img",
            index.meta_names.len(),
            index.meta_properties.len(),
            index.link_rels.len(),
            index.h1.len(),
            index.image_count
        );
        index
    }

    pub(crate) fn meta_name(&self, name: &str) -> Option<&str> {
        self.meta_names.get(name).map(String::as_str)
    }

    pub(crate) fn meta_property(&self, property: &str) -> Option<&str> {
        self.meta_properties.get(property).map(String::as_str)
    }

    pub(crate) fn link_rel(&self, rel: &str) -> Option<&str> {
        self.link_rels.get(rel).map(String::as_str)
    }

    fn record_meta(&mut self, node: &Element) {
        let Some(content) = clean(node.attr("content")) else {
            return;
        };
        if let Some(name) = node.attr("name") {
            self.meta_names
                .entry(name.trim().to_ascii_lowercase())
                .or_insert_with(|| content.clone());
        }
        if let Some(property) = node.attr("property") {
            self.meta_properties
                .entry(property.trim().to_ascii_lowercase())
                .or_insert(content);
        }
    }

    fn record_link(&mut self, node: &Element) {
        let Some(href) = clean(node.attr("href")) else {
            return;
        };
        // rel is a space-separated token list: rel="Canonical alternate"
        for rel in node.attr("rel").unwrap_or_default().split_ascii_whitespace() {
            self.link_rels
                .entry(rel.to_ascii_lowercase())
                .or_insert_with(|| href.clone());
        }
    }
}

fn inside_svg(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|ancestor| ancestor.name() == "svg")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims surrounding whitespace; blank values count as absent.
///
/// Interior whitespace is kept so length rules count the text as written.
fn clean(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
