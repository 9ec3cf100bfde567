//! Tokenizer wrappers
//!
//! Every tokenizer implements the same capability: split input into
//! [`Sentence`]s of annotated words, accepting any of the supported input
//! shapes through one dispatching entry point.

mod doc_pipeline;
mod sent_pipeline;
mod whitespace;

pub use doc_pipeline::DocPipelineTokenizer;
pub use sent_pipeline::SentPipelineTokenizer;
pub use whitespace::WhitespaceTokenizer;

use crate::backend::Layers;
use crate::data::Sentence;
use crate::error::Result;
use crate::input::{RawInput, ShapedInput};

/// Shape-consistent tokenizer output
///
/// A single sample yields a single [`Sentence`]; a batch yields one
/// sentence list per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokenized {
    /// Output for one sample
    Single(Sentence),
    /// Output for a batch of samples
    Batch(Vec<Sentence>),
}

impl Tokenized {
    /// The single-sample sentence, if this is single output
    pub fn into_single(self) -> Option<Sentence> {
        match self {
            Tokenized::Single(sentence) => Some(sentence),
            Tokenized::Batch(_) => None,
        }
    }

    /// The batch sentences, if this is batch output
    pub fn into_batch(self) -> Option<Vec<Sentence>> {
        match self {
            Tokenized::Single(_) => None,
            Tokenized::Batch(sentences) => Some(sentences),
        }
    }

    /// Whether this is batch output
    pub fn is_batch(&self) -> bool {
        matches!(self, Tokenized::Batch(_))
    }
}

/// Splits input into sentences of annotated words
pub trait Tokenizer {
    /// Tokenize one text sample
    fn tokenize_text(&self, text: &str) -> Result<Sentence>;

    /// Tokenize one pre-tokenized sample
    fn tokenize_tokens(&self, tokens: &[String]) -> Result<Sentence>;

    /// Tokenize a batch of text samples
    ///
    /// The default loops the single-sample form; backends with a native
    /// batch call override it.
    fn tokenize_text_batch(&self, texts: &[String]) -> Result<Vec<Sentence>> {
        texts.iter().map(|text| self.tokenize_text(text)).collect()
    }

    /// Tokenize a batch of pre-tokenized samples
    fn tokenize_tokens_batch(&self, samples: &[Vec<String>]) -> Result<Vec<Sentence>> {
        samples
            .iter()
            .map(|tokens| self.tokenize_tokens(tokens))
            .collect()
    }

    /// Classify the input shape and dispatch to the matching form
    ///
    /// This is the uniform calling convention: single samples come back as
    /// [`Tokenized::Single`], batches as [`Tokenized::Batch`].
    fn tokenize(
        &self,
        input: impl Into<RawInput>,
        is_split_into_words: bool,
    ) -> Result<Tokenized>
    where
        Self: Sized,
    {
        match ShapedInput::classify(input.into(), is_split_into_words)? {
            ShapedInput::SingleText(text) => self.tokenize_text(&text).map(Tokenized::Single),
            ShapedInput::SingleTokenList(tokens) => {
                self.tokenize_tokens(&tokens).map(Tokenized::Single)
            }
            ShapedInput::BatchOfText(texts) => {
                self.tokenize_text_batch(&texts).map(Tokenized::Batch)
            }
            ShapedInput::BatchOfTokenLists(samples) => {
                self.tokenize_tokens_batch(&samples).map(Tokenized::Batch)
            }
        }
    }
}

/// Constructor-level configuration shared by the pipeline tokenizers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationConfig {
    /// Language code of the text to tokenize
    pub language: String,
    /// Enable part-of-speech tagging
    pub pos_tags: bool,
    /// Enable lemmatization
    pub lemmas: bool,
    /// Enable dependency parsing
    pub deps: bool,
    /// Treat input as already split on spaces
    pub split_on_spaces: bool,
    /// Place the model on the GPU
    pub gpu: bool,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self::new("en")
    }
}

impl AnnotationConfig {
    /// Configuration for `language` with every annotation layer disabled
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            pos_tags: false,
            lemmas: false,
            deps: false,
            split_on_spaces: false,
            gpu: false,
        }
    }

    /// Enable or disable part-of-speech tagging
    pub fn pos_tags(mut self, enabled: bool) -> Self {
        self.pos_tags = enabled;
        self
    }

    /// Enable or disable lemmatization
    pub fn lemmas(mut self, enabled: bool) -> Self {
        self.lemmas = enabled;
        self
    }

    /// Enable or disable dependency parsing
    pub fn deps(mut self, enabled: bool) -> Self {
        self.deps = enabled;
        self
    }

    /// Expect caller-tokenized input split on spaces
    pub fn split_on_spaces(mut self, enabled: bool) -> Self {
        self.split_on_spaces = enabled;
        self
    }

    /// Place the model on the GPU
    pub fn gpu(mut self, enabled: bool) -> Self {
        self.gpu = enabled;
        self
    }

    /// The annotation layers this configuration enables
    pub(crate) fn layers(&self) -> Layers {
        Layers {
            pos: self.pos_tags,
            lemma: self.lemmas,
            parse: self.deps,
            ..Layers::default()
        }
    }
}
