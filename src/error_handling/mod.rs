//! Error handling.
//!
//! This module provides:
//! - The fetch error taxonomy (`InvalidUrl`, `Timeout`, `NetworkError`, `HttpError`)
//! - Initialization and report export errors
//! - Categorization of `reqwest` errors into the taxonomy
//!
//! Only fetching can fail an analysis run. Missing or malformed metadata is never
//! an error; it surfaces as a Warning or Fail finding in the report instead.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FetchError, FetchErrorKind, InitializationError, ReportError};
