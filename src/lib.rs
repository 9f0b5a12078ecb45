//! book-corpus: scrape a literary catalog into a one-sentence-per-line corpus
//!
//! Downloads plain-text books from a public catalog and rewrites each into
//! cleaned, filtered sentence lines suitable as training or analysis data.
//! The transformation pipeline is pure; catalog extraction, fetching, storage,
//! and configuration are thin collaborators around it.

pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use config::{CatalogConfig, CorpusConfig, FilterConfig, RunConfig};
pub use error::{Error, Result};
pub use pipeline::SentencePipeline;
pub use types::{DiscardReason, RawDocument, RunSummary, SourceKey, TransformResult};
