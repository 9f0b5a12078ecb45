//! Catalog link extraction

use async_trait::async_trait;

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::types::SourceKey;

/// A finite, restartable sequence of book source keys.
///
/// Every call re-reads the catalog and yields the keys in display order;
/// restarting the sequence means calling again.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List the source keys the catalog currently shows
    async fn book_keys(&self) -> Result<Vec<SourceKey>>;
}

/// Catalog backed by the live HTML listing page
pub struct HtmlCatalog {
    client: reqwest::Client,
    catalog_url: String,
}

impl HtmlCatalog {
    /// Create a catalog reader for the configured listing page
    pub fn new(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            catalog_url: config.catalog_url.clone(),
        }
    }
}

#[async_trait]
impl CatalogSource for HtmlCatalog {
    async fn book_keys(&self) -> Result<Vec<SourceKey>> {
        tracing::info!("Getting book links from {}", self.catalog_url);

        let body = self
            .client
            .get(&self.catalog_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let keys = extract_book_keys(&body);
        if keys.is_empty() {
            return Err(Error::catalog(&self.catalog_url, "no book links found"));
        }

        Ok(keys)
    }
}

/// Pull book slugs out of a catalog page.
///
/// Book titles are `h2.s` headings whose anchor points at the book page; the
/// slug is the last meaningful path segment of that href. The HTML document
/// is parsed here, outside the async path, so no parser state crosses an
/// await point.
fn extract_book_keys(html: &str) -> Vec<SourceKey> {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse("h2.s a").unwrap();

    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| {
            let slug = href.trim_end_matches('/').rsplit('/').next()?;
            (!slug.is_empty()).then(|| slug.to_string())
        })
        .collect()
}
