//! Shared types for documents flowing through the corpus builder

/// Identifier for a catalog entry.
///
/// Derived from the catalog link; names both the fetch URL and the output file.
pub type SourceKey = String;

/// A raw book blob fetched from the catalog, before any transformation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Source key the blob was fetched under
    pub key: SourceKey,
    /// Raw byte content as served
    pub bytes: Vec<u8>,
}

impl RawDocument {
    /// Create a raw document
    pub fn new(key: impl Into<SourceKey>, bytes: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            bytes,
        }
    }

    /// Decode the content to text, replacing invalid UTF-8 sequences.
    ///
    /// Replacement characters fall outside the filter whitelist, so damaged
    /// lines are dropped downstream instead of failing the whole document.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Outcome of transforming one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult {
    /// Document passed all filters; payload is the final newline-joined text
    Accepted(String),
    /// Document was rejected as a whole
    Discarded(DiscardReason),
}

/// Why a document was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    /// Too few lines survived the filter chain
    TooShort {
        /// Lines remaining after filtering
        lines: usize,
        /// Configured minimum
        required: usize,
    },
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscardReason::TooShort { lines, required } => {
                write!(f, "too short: {} of {} required lines", lines, required)
            }
        }
    }
}

/// Totals for one driver run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Books accepted and written to storage
    pub added: usize,
    /// Keys skipped because storage already had them
    pub skipped: usize,
    /// Keys the fetcher reported missing
    pub not_found: usize,
    /// Books rejected by the pipeline
    pub discarded: usize,
}
