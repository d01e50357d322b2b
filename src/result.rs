//! Result types for navigation and documentation lookups.
//!
//! Both types are built fresh on every call and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One link discovered in a documentation site's navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Trimmed visible label. Never empty.
    pub name: String,

    /// `href` exactly as found in the page, relative or absolute.
    pub url: String,

    /// Zero-based position in the raw discovered set, before filtering.
    pub index: usize,
}

/// Documentation for a single component page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationResult {
    /// Label of the matched navigation entry.
    pub name: String,

    /// Fully resolved absolute URL of the component page.
    pub url: String,

    /// Primary content fragment as HTML. May be empty.
    pub content: String,
}
