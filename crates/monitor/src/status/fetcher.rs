use std::time::Duration;

use async_trait::async_trait;

use super::document::{DocumentError, StatusDocument};

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Parse(DocumentError),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network: {e}"),
            Self::Status(code) => write!(f, "endpoint answered with status {code}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<DocumentError> for FetchError {
    fn from(e: DocumentError) -> Self {
        Self::Parse(e)
    }
}

/// Where the monitor gets replication status from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<StatusDocument, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cvmfs-mon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StatusSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<StatusDocument, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(StatusDocument::from_slice(&body)?)
    }
}
