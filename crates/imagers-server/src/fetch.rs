//! Downloading source images.
//!
//! Handlers depend on the [`ImageFetcher`] trait so tests can serve images
//! from memory instead of the network.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::{StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to download image: {0}")]
    Transport(String),

    #[error("Failed to download image: HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to download image: body exceeds {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Source of image bytes.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Bytes, FetchError>;
}

/// Parse `raw` and accept only `http` and `https` URLs.
pub fn parse_image_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid image_url '{raw}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme '{other}', use http or https")),
    }
}

/// `reqwest`-backed fetcher with a timeout and a body size cap.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, max_bytes: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, max_bytes))
    }

    pub fn with_client(client: reqwest::Client, max_bytes: u64) -> Self {
        Self { client, max_bytes }
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, FetchError> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let limit = self.max_bytes;
        if response.content_length().is_some_and(|len| len > limit) {
            return Err(FetchError::TooLarge { limit });
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
        {
            if (body.len() + chunk.len()) as u64 > limit {
                return Err(FetchError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(url = %url, bytes = body.len(), "downloaded source image");
        Ok(body.freeze())
    }
}
