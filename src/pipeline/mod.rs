//! Sentence transformation pipeline
//!
//! Converts raw book text into cleaned one-sentence-per-line output: the
//! splitter produces candidate lines, the filter stages drop or normalize
//! them, and the processor composes the fixed stage order and makes the
//! accept/discard decision per document.

pub mod filters;
mod processor;
mod splitter;

pub use processor::SentencePipeline;
pub use splitter::split_sentences;
