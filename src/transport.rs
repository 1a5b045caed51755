//! Pluggable HTTP transport.
//!
//! The client never performs I/O itself: it hands a composed URL and header
//! set to an [`Execute`] implementation and gets back the raw status and body.
//! Production code uses the reqwest-backed [`HttpExecutor`]; tests substitute
//! a stub to exercise the call path without a network.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

use crate::Result;

/// Raw result of one HTTP round trip, before any interpretation.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new<S: Into<String>>(status: StatusCode, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs `GET(url, headers)` and returns `(status, body)`.
///
/// Implementations must be safe to share across tasks; the client stores one
/// executor behind an `Arc` and issues every call through it. Timeouts,
/// redirects, and connection reuse are entirely the executor's business.
#[async_trait]
pub trait Execute: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`Kind::Transport`](crate::error::Kind::Transport) error when
    /// the round trip itself fails (DNS, connection, timeout). Non-2xx
    /// statuses are not errors at this layer.
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<RawResponse>;
}

/// Default [`Execute`] implementation backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: ReqwestClient,
}

impl HttpExecutor {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));

        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Execute for HttpExecutor {
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<RawResponse> {
        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse::new(status, body))
    }
}
