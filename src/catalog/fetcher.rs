//! Plain-text book fetching

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::types::{RawDocument, SourceKey};

/// Fetches the raw plain-text file for a source key.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch raw content; `None` means the catalog entry has no text file
    async fn fetch(&self, key: &SourceKey) -> Result<Option<RawDocument>>;
}

/// Fetcher hitting the text mirror over HTTP
pub struct HttpFetcher {
    client: reqwest::Client,
    text_base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for the configured text mirror
    pub fn new(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            text_base_url: config.text_base_url.clone(),
        }
    }

    fn text_url(&self, key: &str) -> String {
        format!("{}{}.txt", self.text_base_url, key)
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, key: &SourceKey) -> Result<Option<RawDocument>> {
        let response = self.client.get(self.text_url(key)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(Some(RawDocument::new(key.clone(), bytes.to_vec())))
    }
}
