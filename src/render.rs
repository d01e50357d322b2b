//! Plain-text rendering for the calling layer.

use crate::error::Error;
use crate::result::{DocumentationResult, NavigationEntry};
use crate::url_utils;

/// One `name - absolute_url` line per entry.
///
/// Links that cannot be resolved against `base_url` are printed as found.
#[must_use]
pub fn navigation_listing(entries: &[NavigationEntry], base_url: &str) -> String {
    entries
        .iter()
        .map(|entry| {
            let url = url_utils::resolve(&entry.url, base_url).unwrap_or_else(|_| entry.url.clone());
            format!("{} - {url}", entry.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The content fragment itself; name and URL are left to structured output.
#[must_use]
pub fn documentation(result: &DocumentationResult) -> &str {
    &result.content
}

/// User-facing error line.
#[must_use]
pub fn error_text(err: &Error) -> String {
    format!("Error: {err}")
}
