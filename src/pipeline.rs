//! Documentation pipeline.
//!
//! Composes fetching, navigation extraction, name resolution, URL resolution
//! and content extraction. Each call runs sequentially and shares no mutable
//! state with other calls, so one pipeline can serve concurrent tasks.

use tracing::info;

use crate::content::extract_content;
use crate::error::Result;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::navigation::extract_navigation_with_profile;
use crate::options::Options;
use crate::patterns::SiteProfile;
use crate::resolver::find_component;
use crate::result::{DocumentationResult, NavigationEntry};
use crate::url_utils;

/// Answers "list the components" and "get documentation for component X".
#[derive(Debug, Clone)]
pub struct DocumentationPipeline<F = HttpFetcher> {
    fetcher: F,
    profile: SiteProfile,
}

impl DocumentationPipeline<HttpFetcher> {
    /// Pipeline over HTTP, configured from `options`.
    pub fn from_options(options: &Options) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(options.timeout)?, options.profile))
    }
}

impl<F: Fetcher> DocumentationPipeline<F> {
    #[must_use]
    pub fn new(fetcher: F, profile: SiteProfile) -> Self {
        Self { fetcher, profile }
    }

    /// The fetcher used for every request.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch `base_url` and extract its component entries.
    pub async fn list_navigation(&self, base_url: &str) -> Result<Vec<NavigationEntry>> {
        let html = self.fetcher.fetch(base_url).await?;
        let entries = extract_navigation_with_profile(&html, &self.profile);

        info!(base_url, count = entries.len(), "extracted components");
        Ok(entries)
    }

    /// Find `component_name` in the navigation of `base_url` and fetch its page.
    ///
    /// Any failure along the way is returned as-is; there is no partial result.
    pub async fn get_documentation(&self, base_url: &str, component_name: &str) -> Result<DocumentationResult> {
        let entries = self.list_navigation(base_url).await?;
        let entry = find_component(&entries, component_name)?;
        let url = url_utils::resolve(&entry.url, base_url)?;

        info!(component = %entry.name, %url, "fetching component documentation");
        let html = self.fetcher.fetch(&url).await?;

        Ok(DocumentationResult {
            name: entry.name.clone(),
            url,
            content: extract_content(&html),
        })
    }
}
