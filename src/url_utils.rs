//! URL Utility Functions
//!
//! Turns the `href` values found in navigation menus into absolute,
//! fetchable URLs.

use url::Url;

use crate::error::{Error, Result};

/// Check whether a string already carries a URL scheme (`https:`, `mailto:`...).
#[must_use]
pub fn has_scheme(s: &str) -> bool {
    Url::parse(s.trim()).is_ok()
}

/// Parse a base URL, requiring it to be absolute with a host.
pub fn parse_base(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url.trim())
        .map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;

    if base.host().is_none() {
        return Err(Error::InvalidUrl(format!("{base_url}: missing host")));
    }

    Ok(base)
}

/// Origin (scheme + host + non-default port) of a URL, e.g. `https://x.com:8080`.
#[must_use]
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Directory portion of a URL's path, up to and including the last `/`.
#[must_use]
pub fn directory(url: &Url) -> &str {
    let path = url.path();
    path.rfind('/').map_or("/", |pos| &path[..=pos])
}

/// Resolve a possibly-relative link against a base URL.
///
/// - Links with a scheme are returned unchanged.
/// - `//host/path` links take the scheme of the base.
/// - `/path` links are appended to the origin of the base.
/// - Anything else is appended to the base's directory.
///
/// Query strings and fragments of the base are ignored.
///
/// # Example
///
/// ```rust
/// use rs_docnav::url_utils::resolve;
///
/// let base = "https://x.com/components/setting.html";
/// assert_eq!(resolve("/components/Button.html", base)?, "https://x.com/components/Button.html");
/// assert_eq!(resolve("Button.html", base)?, "https://x.com/components/Button.html");
/// assert_eq!(resolve("https://y.com/a.html", base)?, "https://y.com/a.html");
/// # Ok::<(), rs_docnav::Error>(())
/// ```
pub fn resolve(raw_url: &str, base_url: &str) -> Result<String> {
    if has_scheme(raw_url) {
        return Ok(raw_url.to_string());
    }

    let base = parse_base(base_url)?;

    if raw_url.starts_with("//") {
        return Ok(format!("{}:{raw_url}", base.scheme()));
    }

    if raw_url.starts_with('/') {
        return Ok(format!("{}{raw_url}", origin(&base)));
    }

    Ok(format!("{}{}{raw_url}", origin(&base), directory(&base)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://x.com/components/setting.html";

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve("/components/Button.html", BASE).unwrap(),
            "https://x.com/components/Button.html"
        );
    }

    #[test]
    fn test_directory_relative() {
        assert_eq!(
            resolve("Button.html", BASE).unwrap(),
            "https://x.com/components/Button.html"
        );
    }

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(
            resolve("https://y.com/a.html", "https://x.com/b.html").unwrap(),
            "https://y.com/a.html"
        );
    }

    #[test]
    fn test_absolute_link_needs_no_valid_base() {
        assert_eq!(
            resolve("http://y.com/a.html", "not a url").unwrap(),
            "http://y.com/a.html"
        );
    }

    #[test]
    fn test_port_is_kept() {
        assert_eq!(
            resolve("/a.html", "http://localhost:8080/docs/index.html").unwrap(),
            "http://localhost:8080/a.html"
        );
    }

    #[test]
    fn test_default_port_is_dropped() {
        assert_eq!(
            resolve("/a.html", "https://x.com:443/docs/").unwrap(),
            "https://x.com/a.html"
        );
    }

    #[test]
    fn test_base_directory_with_trailing_slash() {
        assert_eq!(
            resolve("button.html", "https://x.com/docs/").unwrap(),
            "https://x.com/docs/button.html"
        );
    }

    #[test]
    fn test_base_without_path() {
        assert_eq!(
            resolve("button.html", "https://x.com").unwrap(),
            "https://x.com/button.html"
        );
    }

    #[test]
    fn test_base_query_and_fragment_ignored() {
        assert_eq!(
            resolve("b.html", "https://x.com/docs/a.html?lang=en#top").unwrap(),
            "https://x.com/docs/b.html"
        );
    }

    #[test]
    fn test_dot_segments_are_concatenated_verbatim() {
        assert_eq!(
            resolve("../guide/a.html", BASE).unwrap(),
            "https://x.com/components/../guide/a.html"
        );
    }

    #[test]
    fn test_scheme_relative() {
        assert_eq!(
            resolve("//cdn.x.com/a.html", BASE).unwrap(),
            "https://cdn.x.com/a.html"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(resolve("a.html", "not a url"), Err(Error::InvalidUrl(_))));
        assert!(matches!(resolve("/a.html", "mailto:a@x.com"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://x.com"));
        assert!(has_scheme("mailto:a@x.com"));
        assert!(!has_scheme("/components/a.html"));
        assert!(!has_scheme("a.html"));
    }
}
