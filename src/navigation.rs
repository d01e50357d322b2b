//! Navigation extraction.
//!
//! Finds the navigation links of a documentation page through the
//! [`NAVIGATION_STRATEGIES`] fallback chain, then keeps only the entries a
//! [`SiteProfile`] recognises as component pages.

use tracing::debug;

use crate::dom::{self, Selection};
use crate::patterns::SiteProfile;
use crate::result::NavigationEntry;
use crate::selector::{self, navigation::NAVIGATION_STRATEGIES};

/// Extract component entries from a page using the default site profile.
#[must_use]
pub fn extract_navigation(html: &str) -> Vec<NavigationEntry> {
    extract_navigation_with_profile(html, &SiteProfile::default())
}

/// Extract component entries from a page using an explicit site profile.
///
/// An empty result is a valid outcome, not an error.
#[must_use]
pub fn extract_navigation_with_profile(html: &str, profile: &SiteProfile) -> Vec<NavigationEntry> {
    let entries = extract_raw_navigation(html);
    let total = entries.len();

    let components: Vec<NavigationEntry> = entries
        .into_iter()
        .filter(|entry| profile.is_component(entry))
        .collect();

    debug!(
        profile = profile.name,
        total,
        kept = components.len(),
        "filtered navigation entries"
    );
    components
}

/// Collect every labelled link of the first navigation strategy that matches.
///
/// `index` is the element's position in the matched set, so entries skipped
/// for a missing label or href leave gaps in the numbering.
#[must_use]
pub fn extract_raw_navigation(html: &str) -> Vec<NavigationEntry> {
    let doc = dom::parse(html);

    let Some((strategy, links)) = selector::first_match(&doc, NAVIGATION_STRATEGIES, |sel| {
        let links = dom::elements(&sel);
        (!links.is_empty()).then_some(links)
    }) else {
        debug!("no navigation elements found");
        return Vec::new();
    };

    debug!(strategy = strategy.name, count = links.len(), "found navigation links");

    links
        .iter()
        .enumerate()
        .filter_map(|(index, link)| to_entry(link, index))
        .collect()
}

fn to_entry(link: &Selection, index: usize) -> Option<NavigationEntry> {
    let name = dom::text(link).trim().to_string();
    let url = dom::attr(link, "href")?;
    if name.is_empty() || url.is_empty() {
        return None;
    }

    Some(NavigationEntry { name, url, index })
}
