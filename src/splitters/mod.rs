//! Sentence-splitter wrappers

mod pipeline;

pub use pipeline::{PipelineSentenceSplitter, SplitStrategy};

use crate::error::Result;

/// Splits running text into sentence strings
pub trait SentenceSplitter {
    /// Split one text into trimmed sentence strings
    fn split(&self, text: &str) -> Result<Vec<String>>;

    /// Split a batch of texts
    ///
    /// The default loops [`SentenceSplitter::split`]; backends with native
    /// batch iteration override it, trading per-item error isolation for
    /// throughput (a failure on any item aborts the whole batch).
    fn split_batch(&self, texts: &[String]) -> Result<Vec<Vec<String>>> {
        texts.iter().map(|text| self.split(text)).collect()
    }
}
