//! Backend seam
//!
//! The actual linguistic models are external collaborators. This module
//! defines the narrow interface they are consumed through: a [`Pipeline`]
//! takes a document and returns annotated sentences, a [`PipelineProvider`]
//! knows how to load (and, when missing, download) a pipeline for a given
//! configuration key. Backend calls are synchronous and may be slow; no
//! timeout or cancellation is layered on top.

mod blank;
mod registry;

pub use blank::BlankPipeline;
pub use registry::{Layers, ModelRegistry, PipelineKey};

use crate::error::Result;
use std::sync::Arc;

/// A document as submitted to a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Running text the backend tokenizes itself
    Text(String),
    /// Caller-tokenized words; every token is treated as followed by one space
    Pretokenized(Vec<String>),
}

/// A backend-native token, before conversion to [`crate::Word`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawToken {
    /// Surface form
    pub text: String,
    /// Byte offset of the first byte in the submitted text
    pub start_char: Option<usize>,
    /// Byte offset one past the last byte
    pub end_char: Option<usize>,
    /// Lemma, if the layer was enabled
    pub lemma: Option<String>,
    /// Coarse part of speech, if the layer was enabled
    pub pos: Option<String>,
    /// Dependency relation, if the layer was enabled
    pub dep: Option<String>,
    /// Syntactic head index, if the layer was enabled
    pub head: Option<usize>,
}

/// A backend-native sentence: its surface text plus member tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSentence {
    /// Surface text of the sentence, untrimmed
    pub text: String,
    /// Member tokens in order
    pub tokens: Vec<RawToken>,
}

/// An opaque, loaded backend pipeline
///
/// Implementations wrap one external model object. A failure on any item
/// of a batch aborts the whole batch; there are no partial results.
pub trait Pipeline: Send + Sync {
    /// Analyze one document
    fn process(&self, doc: &Document) -> Result<Vec<RawSentence>>;

    /// Analyze a batch of documents
    ///
    /// The default iterates [`Pipeline::process`]; backends with native
    /// batch iteration override it for throughput.
    fn process_batch(&self, docs: &[Document]) -> Result<Vec<Vec<RawSentence>>> {
        docs.iter().map(|doc| self.process(doc)).collect()
    }
}

impl std::fmt::Debug for dyn Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

/// Constructs backend pipelines for configuration keys
///
/// The provider owns model installation: [`PipelineProvider::load`] signals
/// a missing local model with [`crate::Error::ModelNotFound`], and
/// [`PipelineProvider::download`] performs the one-time install the model
/// registry triggers before its single retry.
pub trait PipelineProvider: Send + Sync {
    /// Construct a pipeline from a locally installed model
    fn load(&self, key: &PipelineKey) -> Result<Arc<dyn Pipeline>>;

    /// Download and install the model for `key`
    fn download(&self, key: &PipelineKey) -> Result<()>;
}
