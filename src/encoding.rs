//! Character encoding detection for fetched pages.
//!
//! Response bodies arrive as bytes. The charset is taken from the
//! `Content-Type` response header when present, then from the page's own
//! `<meta>` declarations, and finally defaults to UTF-8. A UTF-16 label in a
//! `<meta>` tag is read as UTF-8: a byte stream that spells out the tag in
//! ASCII cannot be UTF-16.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Only the head of a document is scanned for `<meta>` declarations.
const SNIFF_LEN: usize = 1024;

/// `charset=...` parameter of a Content-Type value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

fn lookup(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| lookup(m.as_str()))
}

fn meta_charset(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| lookup(m.as_str()))
        .map(|enc| if enc == UTF_16LE || enc == UTF_16BE { UTF_8 } else { enc })
}

/// Detect the character encoding of an HTML response.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(html))
        .unwrap_or(UTF_8)
}

/// Decode an HTML response body to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected. A byte
/// order mark, if present, takes precedence over the detected encoding.
///
/// # Examples
///
/// ```
/// use rs_docnav::encoding::decode_html;
///
/// let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(body, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
