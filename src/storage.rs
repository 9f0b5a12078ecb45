//! Flat-file book storage

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::SourceKey;

/// Keyed text storage for accepted books.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Write (or overwrite) the text stored under a key
    async fn save(&self, key: &SourceKey, text: &str) -> Result<()>;

    /// Check whether a key already has stored text
    async fn exists(&self, key: &SourceKey) -> Result<bool>;
}

/// Book store writing one `<key>.txt` file per book
pub struct FlatFileStore {
    output_dir: PathBuf,
}

impl FlatFileStore {
    /// Create a store, creating the output directory if needed
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if !output_dir.exists() {
            tracing::info!("Creating directory {}", output_dir.display());
            std::fs::create_dir_all(&output_dir)?;
        }
        Ok(Self { output_dir })
    }

    /// Path for a book file
    fn book_path(&self, key: &str) -> PathBuf {
        self.output_dir.join(format!("{}.txt", key))
    }
}

#[async_trait]
impl BookStore for FlatFileStore {
    async fn save(&self, key: &SourceKey, text: &str) -> Result<()> {
        // Every line is newline-terminated, including the last one.
        let mut contents = text.to_string();
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        tokio::fs::write(self.book_path(key), contents)
            .await
            .map_err(|e| Error::storage(format!("failed to write {}.txt: {}", key, e)))?;
        Ok(())
    }

    async fn exists(&self, key: &SourceKey) -> Result<bool> {
        Ok(self.book_path(key).exists())
    }
}
