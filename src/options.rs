//! Configuration options for documentation lookups.
//!
//! The `Options` struct selects the documentation site, the fetch timeout and
//! the site profile used to filter navigation entries.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::patterns::SiteProfile;

/// Environment variable overriding [`Options::base_url`].
pub const BASE_URL_ENV: &str = "DOCNAV_BASE_URL";

/// Environment variable overriding [`Options::timeout`], in whole seconds.
/// `0` disables the timeout.
pub const TIMEOUT_ENV: &str = "DOCNAV_TIMEOUT_SECS";

/// Page whose sidebar lists every TuniaoUI component.
pub const DEFAULT_BASE_URL: &str = "https://vue2.tuniaokj.com/components/setting.html";

/// Configuration options for documentation lookups.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_docnav::Options;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(5)),
///     ..Options::default()
/// };
/// assert_eq!(options.base_url, rs_docnav::options::DEFAULT_BASE_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Page containing the navigation menu. Relative component links are
    /// resolved against it.
    ///
    /// Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Hard limit on each HTTP request, connect through body read.
    ///
    /// Default: `Some(30s)`
    pub timeout: Option<Duration>,

    /// Tables that tell component pages apart from site chrome.
    ///
    /// Default: [`crate::patterns::TUNIAO_VUE2`]
    pub profile: SiteProfile,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            profile: SiteProfile::default(),
        }
    }
}

impl Options {
    /// Defaults overlaid with `DOCNAV_BASE_URL` and `DOCNAV_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::default().with_overrides(var(BASE_URL_ENV).as_deref(), var(TIMEOUT_ENV).as_deref())
    }

    /// Apply raw override values, validating them.
    ///
    /// Blank values are ignored.
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_secs: Option<&str>) -> Result<Self> {
        if let Some(base_url) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            crate::url_utils::parse_base(base_url)
                .map_err(|e| Error::Config(format!("{BASE_URL_ENV}: {e}")))?;
            self.base_url = base_url.to_string();
        }

        if let Some(raw) = timeout_secs.map(str::trim).filter(|s| !s.is_empty()) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| Error::Config(format!("{TIMEOUT_ENV}: expected whole seconds, got {raw:?}")))?;
            self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(self)
    }
}
