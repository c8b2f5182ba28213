//! HTTP client trait and implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::FetchError;

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and return the body as text. Non-2xx statuses are errors.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Configuration for [`ReqwestClient`].
#[derive(Clone)]
pub struct ReqwestClientBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ReqwestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestClientBuilder {
    /// No timeout, default user agent.
    pub fn new() -> Self {
        Self {
            timeout: None,
            user_agent: format!("larder/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout. None means requests may wait indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestClient {
            inner: Arc::new(builder.build()?),
        })
    }
}

/// Production HTTP client backed by a pooled reqwest client.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<reqwest::Client>,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        ReqwestClientBuilder::new().build()
    }

    pub fn builder() -> ReqwestClientBuilder {
        ReqwestClientBuilder::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url, "network: fetching");
        let response = self.inner.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = %status, "network: request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| FetchError::InvalidEncoding(format!("Invalid UTF-8 in response: {}", e)))
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16),
    Error(String),
}

/// Mock HTTP client for testing. Records every URL it is asked for.
#[derive(Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a 200 response body for a URL.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(body.to_string()))
    }

    /// Add a non-2xx status for a URL.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a transport error for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status(*status)),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidUrl(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
