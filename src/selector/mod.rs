//! Selector Infrastructure
//!
//! Extraction works through ordered fallback chains: a list of CSS selector
//! strategies tried one after another until one produces an acceptable
//! result. Each chain lives in its own submodule as a static table.

use crate::dom::{self, Document, Selection};

pub mod content;
pub mod navigation;

/// One named CSS query in a fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorStrategy {
    /// Short label used in logs.
    pub name: &'static str,

    /// CSS selector (selector lists allowed).
    pub selector: &'static str,
}

impl SelectorStrategy {
    #[must_use]
    pub const fn new(name: &'static str, selector: &'static str) -> Self {
        Self { name, selector }
    }
}

/// Evaluate strategies in order and return the first accepted result
///
/// `accept` receives the full selection of each strategy and decides whether
/// it counts; returning `None` moves on to the next strategy. Later
/// strategies are never evaluated once one is accepted, so results from
/// different strategies are never merged.
///
/// # Example
///
/// ```rust
/// use rs_docnav::dom;
/// use rs_docnav::selector::{self, SelectorStrategy};
///
/// const CHAIN: &[SelectorStrategy] = &[
///     SelectorStrategy::new("primary", ".missing"),
///     SelectorStrategy::new("fallback", "p"),
/// ];
///
/// let doc = dom::parse("<p>one</p><p>two</p>");
/// let (used, count) = selector::first_match(&doc, CHAIN, |sel| {
///     (sel.length() > 0).then(|| sel.length())
/// })
/// .unwrap();
/// assert_eq!(used.name, "fallback");
/// assert_eq!(count, 2);
/// ```
pub fn first_match<'a, 's, T, F>(
    doc: &'a Document,
    strategies: &'s [SelectorStrategy],
    mut accept: F,
) -> Option<(&'s SelectorStrategy, T)>
where
    F: FnMut(Selection<'a>) -> Option<T>,
{
    strategies
        .iter()
        .find_map(|strategy| accept(dom::query(doc, strategy.selector)).map(|found| (strategy, found)))
}
