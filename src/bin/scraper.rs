//! Corpus scraper binary
//!
//! Run with: cargo run --bin book-corpus

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_corpus::catalog::{HtmlCatalog, HttpFetcher};
use book_corpus::config::CorpusConfig;
use book_corpus::driver::IngestDriver;
use book_corpus::pipeline::SentencePipeline;
use book_corpus::storage::FlatFileStore;

/// Scrape a literary catalog into a one-sentence-per-line corpus
#[derive(Debug, Parser)]
#[command(name = "book-corpus", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many books have been accepted
    #[arg(long)]
    book_amount: Option<usize>,

    /// Minimum words a line needs to be kept
    #[arg(long)]
    words_per_line: Option<usize>,

    /// Minimum lines a book needs to be kept
    #[arg(long)]
    discard_lines_threshold: Option<usize>,

    /// Leave already-saved books untouched instead of re-fetching them
    #[arg(long)]
    skip_already_added: Option<bool>,

    /// Directory the book files are written to
    #[arg(long)]
    output_directory: Option<PathBuf>,

    /// Catalog page listing the books to scrape
    #[arg(long)]
    catalog_url: Option<String>,
}

impl Cli {
    /// Fold the command line into the layered configuration
    fn apply(self, config: &mut CorpusConfig) {
        if let Some(v) = self.book_amount {
            config.run.book_amount = v;
        }
        if let Some(v) = self.words_per_line {
            config.filter.min_words_per_line = v;
        }
        if let Some(v) = self.discard_lines_threshold {
            config.filter.discard_line_threshold = v;
        }
        if let Some(v) = self.skip_already_added {
            config.run.skip_already_added = v;
        }
        if let Some(v) = self.output_directory {
            config.run.output_directory = v;
        }
        if let Some(v) = self.catalog_url {
            config.catalog.catalog_url = v;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_corpus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => CorpusConfig::from_file(path)?,
        None => CorpusConfig::default(),
    };
    config.apply_env()?;
    cli.apply(&mut config);

    tracing::info!("Configuration loaded");
    tracing::info!("  - Catalog: {}", config.catalog.catalog_url);
    tracing::info!("  - Book amount: {}", config.run.book_amount);
    tracing::info!("  - Words per line: {}", config.filter.min_words_per_line);
    tracing::info!("  - Discard threshold: {}", config.filter.discard_line_threshold);
    tracing::info!("  - Output directory: {}", config.run.output_directory.display());

    let client = reqwest::Client::new();
    let catalog = HtmlCatalog::new(client.clone(), &config.catalog);
    let fetcher = HttpFetcher::new(client, &config.catalog);
    let store = FlatFileStore::new(&config.run.output_directory)?;
    let pipeline = SentencePipeline::new(config.filter.clone());

    let driver = IngestDriver::new(catalog, fetcher, store, pipeline, config.run.clone());
    let summary = driver.run().await?;

    println!(
        "Added {} books ({} skipped, {} missing, {} discarded)",
        summary.added, summary.skipped, summary.not_found, summary.discarded
    );

    Ok(())
}
