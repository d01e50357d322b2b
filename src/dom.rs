//! DOM Operations Adapter
//!
//! The small set of HTML capabilities the extractors rely on: parse a
//! document, query it with CSS selectors, read text, attributes and inner
//! HTML. Everything else in the crate goes through these functions, so
//! `dom_query` stays an implementation detail.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Zero-copy text; cloning is O(1) and it derefs to `str`
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
///
/// Parsing is permissive: malformed markup is repaired, never rejected.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// Query all elements matching a CSS selector, in document order
///
/// Selector lists (`a, b`) are matched in a single pass, so the result keeps
/// document order rather than grouping by selector.
#[inline]
#[must_use]
pub fn query<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector)
}

/// Split a selection into one single-node selection per element
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// First element of a selection, if any
#[must_use]
pub fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content of the first node in the selection
///
/// Returns an empty tendril when the selection is empty.
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    first(sel).map(|el| el.inner_html()).unwrap_or_default()
}
