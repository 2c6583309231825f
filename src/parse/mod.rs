//! HTML parsing and metadata extraction.
//!
//! This module turns raw markup into the normalized [`MetaFields`] record:
//! - Lenient parsing via `scraper` (html5ever), never failing on malformed input
//! - A single traversal that indexes title, meta, link, h1 and img elements
//! - A lookup table that maps each text field to where it lives in the document
//!
//! Attribute names are matched case-insensitively by the HTML parser itself;
//! `name`, `property` and `rel` values are lowercased here before matching.

mod extract;
mod fields;
mod index;

use log::debug;
use scraper::Html;

// Re-export public API
pub use extract::extract;
pub use fields::{MetaFields, TextField};

/// A parsed HTML document.
#[derive(Debug, Clone)]
pub struct ParsedTree {
    document: Html,
}

impl ParsedTree {
    /// The underlying `scraper` document, for callers that need custom queries.
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Number of syntax errors the parser recovered from.
    pub fn recovered_errors(&self) -> usize {
        self.document.errors.len()
    }
}

/// Parses raw markup into a queryable tree.
///
/// Never fails: unclosed tags, stray end tags and missing `<head>`/`<body>` are
/// repaired the way browsers repair them, and non-HTML input yields an empty
/// document skeleton.
pub fn parse(raw_html: &str) -> ParsedTree {
    let document = Html::parse_document(raw_html);
    if !document.errors.is_empty() {
        debug!(
            "Recovered from {} HTML parse errors",
            document.errors.len()
        );
    }
    ParsedTree { document }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
