//! Sentence-pipeline tokenizer
//!
//! Wraps a backend that segments input into sentences itself and only
//! accepts one document at a time through its single-sample code path.
//! Pre-tokenized input needs normalization before dispatch: the backend
//! either runs in pretokenized mode, or the tokens are whitespace-joined
//! first (a lossy fallback, logged but not an error).

use crate::backend::{
    Document, ModelRegistry, Pipeline, PipelineKey, PipelineProvider, RawSentence,
};
use crate::data::{Sentence, Word};
use crate::error::Result;
use crate::tokenizers::{AnnotationConfig, Tokenizer};
use std::sync::Arc;

/// A tokenizer backed by a sentence-segmenting pipeline
pub struct SentPipelineTokenizer {
    pipeline: Arc<dyn Pipeline>,
    config: AnnotationConfig,
}

impl SentPipelineTokenizer {
    /// Build a tokenizer for `config`, fetching the backend through the
    /// registry
    ///
    /// Accepts any language code; the backend resolves it to a model.
    pub fn new(
        config: AnnotationConfig,
        registry: &ModelRegistry,
        provider: &dyn PipelineProvider,
    ) -> Result<Self> {
        let key = PipelineKey {
            model: config.language.clone(),
            layers: config.layers(),
            pretokenized: config.split_on_spaces,
            gpu: config.gpu,
        };
        let pipeline = registry.get_or_build(&key, provider)?;
        Ok(Self { pipeline, config })
    }

    /// The configuration this tokenizer was built with
    pub fn config(&self) -> &AnnotationConfig {
        &self.config
    }

    /// Convert one backend sentence, generating per-sentence indices
    ///
    /// The lemma falls back to the surface text when the backend left it
    /// empty.
    fn convert(raw: RawSentence) -> Sentence {
        raw.tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| Word {
                lemma: Some(
                    token
                        .lemma
                        .filter(|lemma| !lemma.is_empty())
                        .unwrap_or_else(|| token.text.clone()),
                ),
                text: token.text,
                index: Some(i),
                start_char: token.start_char,
                end_char: token.end_char,
                pos: token.pos,
                dep: token.dep,
                head: token.head,
            })
            .collect()
    }

    fn first_sentence(mut sentences: Vec<RawSentence>) -> Sentence {
        if sentences.is_empty() {
            Sentence::new()
        } else {
            Self::convert(sentences.remove(0))
        }
    }
}

impl Tokenizer for SentPipelineTokenizer {
    fn tokenize_text(&self, text: &str) -> Result<Sentence> {
        let sentences = self.pipeline.process(&Document::Text(text.to_owned()))?;
        Ok(Self::first_sentence(sentences))
    }

    fn tokenize_tokens(&self, tokens: &[String]) -> Result<Sentence> {
        let doc = if self.config.split_on_spaces {
            Document::Pretokenized(tokens.to_vec())
        } else {
            log::warn!(
                "input is split into words but the backend was not built with \
                 `split_on_spaces`; joining the tokens into a single string (lossy)"
            );
            Document::Text(tokens.join(" "))
        };
        // The single-sample path takes one document at a time; wrap the
        // sample in a batch of one.
        let mut batches = self.pipeline.process_batch(std::slice::from_ref(&doc))?;
        if batches.is_empty() {
            return Ok(Sentence::new());
        }
        Ok(Self::first_sentence(batches.remove(0)))
    }

    fn tokenize_text_batch(&self, texts: &[String]) -> Result<Vec<Sentence>> {
        let docs: Vec<Document> = texts
            .iter()
            .map(|text| Document::Text(text.clone()))
            .collect();
        let batches = self.pipeline.process_batch(&docs)?;
        // One output sentence per backend-returned sentence, across docs.
        Ok(batches
            .into_iter()
            .flatten()
            .map(Self::convert)
            .collect())
    }

    fn tokenize_tokens_batch(&self, samples: &[Vec<String>]) -> Result<Vec<Sentence>> {
        // The batch call wants document wrappers; join each pre-tokenized
        // sample back into running text first.
        let texts: Vec<String> = samples.iter().map(|tokens| tokens.join(" ")).collect();
        self.tokenize_text_batch(&texts)
    }
}
