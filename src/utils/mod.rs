//! Shared utilities.
//!
//! This module provides:
//! - Error message sanitization
//! - CSS selector parsing for the static selectors used by the extractor

pub mod sanitize;
mod selector;

pub use selector::parse_selector_unsafe;
