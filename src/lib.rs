//! # rs-docnav
//!
//! Retrieves a documentation website's component navigation and individual
//! component pages for downstream consumers such as automation agents.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_docnav::{extract_content, extract_navigation, find_component};
//!
//! let nav = r#"<html><body><nav class="VPSidebarNav">
//!     <a class="VPLink" href="/components/intro.html">介绍</a>
//!     <a class="VPLink" href="/components/button.html">Button 按钮</a>
//! </nav></body></html>"#;
//!
//! let entries = extract_navigation(nav);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(find_component(&entries, "button")?.url, "/components/button.html");
//!
//! let page = r#"<html><body><div class="vp-doc"><p>hi</p></div></body></html>"#;
//! assert_eq!(extract_content(page), "<p>hi</p>");
//! # Ok::<(), rs_docnav::Error>(())
//! ```
//!
//! Over the network, [`DocumentationPipeline`] chains the same steps:
//!
//! ```rust,no_run
//! use rs_docnav::{DocumentationPipeline, Options};
//!
//! # async fn demo() -> rs_docnav::Result<()> {
//! let options = Options::default();
//! let pipeline = DocumentationPipeline::from_options(&options)?;
//! let doc = pipeline.get_documentation(&options.base_url, "Code").await?;
//! println!("{} ({}): {} bytes", doc.name, doc.url, doc.content.len());
//! # Ok(()) }
//! ```
//!
//! ## Pipeline
//!
//! - **Navigation**: sidebar links first, generic menu anchors otherwise,
//!   filtered down to component pages by a [`SiteProfile`]
//! - **Resolution**: first entry whose name contains the target, ignoring case
//! - **URLs**: relative links resolved against the navigation page
//! - **Content**: `.vp-doc`, then `main .content-container`, then `<body>`

mod content;
mod error;
mod navigation;
mod resolver;
mod result;

/// Configuration options and their environment overrides.
pub mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector fallback chains for navigation and content.
pub mod selector;

/// Site profiles separating component pages from documentation chrome.
pub mod patterns;

/// URL resolution against a base page.
pub mod url_utils;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// HTTP fetching behind the [`Fetcher`] trait.
pub mod fetch;

/// End-to-end documentation lookups.
pub mod pipeline;

/// Plain-text rendering of lookup results.
pub mod render;

// Public API - re-exports
pub use content::extract_content;
pub use error::{Error, FetchError, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use navigation::{extract_navigation, extract_navigation_with_profile, extract_raw_navigation};
pub use options::Options;
pub use patterns::SiteProfile;
pub use pipeline::DocumentationPipeline;
pub use resolver::{find_component, validate_component_name};
pub use result::{DocumentationResult, NavigationEntry};
