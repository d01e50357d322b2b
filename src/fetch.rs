//! Page fetching.
//!
//! [`Fetcher`] is the seam between the extraction pipeline and the network.
//! [`HttpFetcher`] is the reqwest-backed implementation; tests substitute
//! in-memory fetchers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info};

use crate::encoding;
use crate::error::{Error, FetchError, Result};

/// Retrieves the HTML text of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the decoded body.
    ///
    /// Fails with [`FetchError::Status`] on a non-2xx response and
    /// [`FetchError::Network`] when no response could be read. Never retries.
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// Plain HTTP(S) GET with no custom headers, cookies or retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`, if set.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn network_error(url: &str, err: &reqwest::Error) -> FetchError {
    // reqwest's Display omits the cause chain ("error sending request")
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    FetchError::Network {
        url: url.to_string(),
        message,
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| network_error(url, &e))?;
        let html = encoding::decode_html(&body, content_type.as_deref());

        info!(url, bytes = body.len(), "fetched page");
        Ok(html)
    }
}
