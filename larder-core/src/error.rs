use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Invalid response encoding: {0}")]
    InvalidEncoding(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Malformed catalog response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Catalog is not configured: {0}")]
    NotConfigured(&'static str),
}
