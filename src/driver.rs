//! Sequential ingestion driver

use crate::catalog::{CatalogSource, ContentFetcher};
use crate::config::RunConfig;
use crate::error::Result;
use crate::pipeline::SentencePipeline;
use crate::storage::BookStore;
use crate::types::{RunSummary, TransformResult};

/// Drives one scrape run: list keys, fetch, transform, persist.
///
/// Strictly sequential; one document is in flight at a time. Not-found
/// fetches, too-short books, and already-saved keys are logged and skipped;
/// transport and storage failures end the run.
pub struct IngestDriver<C, F, S> {
    catalog: C,
    fetcher: F,
    store: S,
    pipeline: SentencePipeline,
    run: RunConfig,
}

impl<C, F, S> IngestDriver<C, F, S>
where
    C: CatalogSource,
    F: ContentFetcher,
    S: BookStore,
{
    /// Assemble a driver from its collaborators
    pub fn new(catalog: C, fetcher: F, store: S, pipeline: SentencePipeline, run: RunConfig) -> Self {
        Self {
            catalog,
            fetcher,
            store,
            pipeline,
            run,
        }
    }

    /// The storage collaborator
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run until `book_amount` books are accepted or the catalog runs out
    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let keys = self.catalog.book_keys().await?;

        for key in keys {
            if summary.added == self.run.book_amount {
                break;
            }

            if self.run.skip_already_added && self.store.exists(&key).await? {
                tracing::info!("Skipping: {}.txt", key);
                summary.skipped += 1;
                continue;
            }

            tracing::info!("Adding: {}.txt", key);

            let Some(document) = self.fetcher.fetch(&key).await? else {
                tracing::warn!("404: {}.txt", key);
                summary.not_found += 1;
                continue;
            };

            match self.pipeline.process(&document.text()) {
                TransformResult::Discarded(reason) => {
                    tracing::warn!("Discarded: {}.txt ({})", key, reason);
                    summary.discarded += 1;
                }
                TransformResult::Accepted(text) => {
                    self.store.save(&key, &text).await?;
                    summary.added += 1;
                }
            }
        }

        tracing::info!("Added: {} books", summary.added);
        Ok(summary)
    }
}
