//! Error types for rs-docnav.
//!
//! This module defines the error types returned by fetching, navigation
//! lookup and URL resolution.

/// Failure to retrieve a page over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch HTML from {url}: {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The request never produced a response (DNS, timeout, reset, body read).
    #[error("Failed to fetch HTML from {url}: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// HTTP status code, if the server responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }
}

/// Error type for documentation lookups.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// No navigation entries were discovered, or none matched the name.
    #[error("{0}")]
    NotFound(String),

    /// A URL could not be parsed as an absolute URL with a host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Caller-supplied input was rejected before any lookup.
    #[error("{0}")]
    InvalidInput(String),

    /// A configuration value could not be interpreted.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for documentation lookups.
pub type Result<T> = std::result::Result<T, Error>;
