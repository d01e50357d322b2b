//! Content fragment extraction.

use tracing::debug;

use crate::dom;
use crate::selector::{self, content::CONTENT_STRATEGIES};

/// Extract the primary documentation fragment of a page as HTML.
///
/// Tries each of [`CONTENT_STRATEGIES`] and returns the inner HTML of the
/// first container that has any. Containers that exist but are empty are
/// skipped. Returns an empty string when nothing qualifies, never an error.
#[must_use]
pub fn extract_content(html: &str) -> String {
    let doc = dom::parse(html);

    let found = selector::first_match(&doc, CONTENT_STRATEGIES, |sel| {
        let inner = dom::inner_html(&sel);
        (!inner.is_empty()).then(|| inner.to_string())
    });

    match found {
        Some((strategy, content)) => {
            debug!(strategy = strategy.name, len = content.len(), "found content container");
            content
        }
        None => {
            debug!("no content container found");
            String::new()
        }
    }
}
