//! Pipeline orchestration: split, filter, trim, accept or discard

use std::collections::HashSet;

use crate::config::FilterConfig;
use crate::types::{DiscardReason, TransformResult};

use super::filters;
use super::splitter::split_sentences;

/// The document transformation pipeline.
///
/// Owns an immutable filter configuration with the character whitelist
/// precompiled. `process` is pure and stateless across calls, so one pipeline
/// instance serves any number of documents.
pub struct SentencePipeline {
    config: FilterConfig,
    allowed: HashSet<char>,
}

impl SentencePipeline {
    /// Create a pipeline from a filter configuration
    pub fn new(config: FilterConfig) -> Self {
        let allowed = config.allowed_characters.chars().collect();
        Self { config, allowed }
    }

    /// Transform one raw document into one-sentence-per-line text.
    ///
    /// Stage order is load-bearing: the trailing trim counts only lines that
    /// already passed the word filter, and capitalization never touches lines
    /// the trim is about to discard.
    pub fn process(&self, raw: &str) -> TransformResult {
        let lines = split_sentences(raw);
        let lines = filters::retain_whitelisted(lines, &self.allowed);
        let lines = filters::drop_blank(lines);
        let lines = filters::retain_min_words(lines, self.config.min_words_per_line);
        let lines = filters::trim_trailing(lines, self.config.trailing_lines_to_trim);
        let lines = filters::capitalize_first(lines);
        let lines = filters::retain_long_final_token(lines);
        let lines = filters::retain_clean_final_token(lines);

        if lines.len() < self.config.discard_line_threshold {
            return TransformResult::Discarded(DiscardReason::TooShort {
                lines: lines.len(),
                required: self.config.discard_line_threshold,
            });
        }

        TransformResult::Accepted(lines.join("\n"))
    }
}
