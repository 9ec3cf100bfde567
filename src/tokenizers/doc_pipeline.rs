//! Document-pipeline tokenizer
//!
//! Wraps a backend that annotates a whole document in one call and exposes
//! its token stream doc-wide. The language must have an entry in the fixed
//! model table; the check happens before any backend construction.

use crate::backend::{
    Document, ModelRegistry, Pipeline, PipelineKey, PipelineProvider, RawSentence,
};
use crate::data::{Sentence, Word};
use crate::error::{Error, Result};
use crate::tokenizers::{AnnotationConfig, Tokenizer};
use std::sync::Arc;

/// Language → pretrained model for the document-pipeline backend
const LANGUAGE_MODELS: &[(&str, &str)] = &[
    ("ca", "ca_core_news_sm"),
    ("da", "da_core_news_sm"),
    ("de", "de_core_news_sm"),
    ("el", "el_core_news_sm"),
    ("en", "en_core_web_sm"),
    ("es", "es_core_news_sm"),
    ("fi", "fi_core_news_sm"),
    ("fr", "fr_core_news_sm"),
    ("it", "it_core_news_sm"),
    ("ja", "ja_core_news_sm"),
    ("lt", "lt_core_news_sm"),
    ("nb", "nb_core_news_sm"),
    ("nl", "nl_core_news_sm"),
    ("pl", "pl_core_news_sm"),
    ("pt", "pt_core_news_sm"),
    ("ro", "ro_core_news_sm"),
    ("ru", "ru_core_news_sm"),
    ("sv", "sv_core_news_sm"),
    ("zh", "zh_core_web_sm"),
];

/// The codes of `LANGUAGE_MODELS`, in the same order
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ca", "da", "de", "el", "en", "es", "fi", "fr", "it", "ja", "lt", "nb", "nl", "pl", "pt",
    "ro", "ru", "sv", "zh",
];

fn model_for(language: &str) -> Result<&'static str> {
    LANGUAGE_MODELS
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, model)| *model)
        .ok_or_else(|| Error::UnsupportedLanguage {
            code: language.to_owned(),
            supported: SUPPORTED_LANGUAGES,
        })
}

/// A tokenizer backed by a whole-document annotation pipeline
pub struct DocPipelineTokenizer {
    pipeline: Arc<dyn Pipeline>,
    config: AnnotationConfig,
}

impl std::fmt::Debug for DocPipelineTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocPipelineTokenizer")
            .field("config", &self.config)
            .finish()
    }
}

impl DocPipelineTokenizer {
    /// Build a tokenizer for `config`, fetching the backend through the
    /// registry
    ///
    /// Fails with [`Error::UnsupportedLanguage`] before any backend
    /// construction when the language has no model entry.
    pub fn new(
        config: AnnotationConfig,
        registry: &ModelRegistry,
        provider: &dyn PipelineProvider,
    ) -> Result<Self> {
        let model = model_for(&config.language)?;
        let key = PipelineKey {
            model: model.to_owned(),
            layers: config.layers(),
            pretokenized: config.split_on_spaces,
            gpu: config.gpu,
        };
        let pipeline = registry.get_or_build(&key, provider)?;
        Ok(Self { pipeline, config })
    }

    /// The language codes with a model entry
    pub fn supported_languages() -> &'static [&'static str] {
        SUPPORTED_LANGUAGES
    }

    /// The configuration this tokenizer was built with
    pub fn config(&self) -> &AnnotationConfig {
        &self.config
    }

    fn document_for_text(&self, text: &str) -> Document {
        if self.config.split_on_spaces {
            Document::Pretokenized(text.split(' ').map(str::to_owned).collect())
        } else {
            Document::Text(text.to_owned())
        }
    }

    /// Flatten backend sentences into one doc-wide sentence
    fn convert(sentences: Vec<RawSentence>) -> Sentence {
        let mut out = Sentence::new();
        let mut index = 0;
        for raw in sentences {
            for token in raw.tokens {
                out.push(Word {
                    text: token.text,
                    index: Some(index),
                    start_char: token.start_char,
                    end_char: token.end_char,
                    lemma: token.lemma,
                    pos: token.pos,
                    dep: token.dep,
                    head: token.head,
                });
                index += 1;
            }
        }
        out
    }
}

impl Tokenizer for DocPipelineTokenizer {
    fn tokenize_text(&self, text: &str) -> Result<Sentence> {
        let doc = self.document_for_text(text);
        Ok(Self::convert(self.pipeline.process(&doc)?))
    }

    fn tokenize_tokens(&self, tokens: &[String]) -> Result<Sentence> {
        let doc = Document::Pretokenized(tokens.to_vec());
        Ok(Self::convert(self.pipeline.process(&doc)?))
    }

    fn tokenize_text_batch(&self, texts: &[String]) -> Result<Vec<Sentence>> {
        let docs: Vec<Document> = texts.iter().map(|t| self.document_for_text(t)).collect();
        let batches = self.pipeline.process_batch(&docs)?;
        Ok(batches.into_iter().map(Self::convert).collect())
    }

    fn tokenize_tokens_batch(&self, samples: &[Vec<String>]) -> Result<Vec<Sentence>> {
        let docs: Vec<Document> = samples
            .iter()
            .map(|tokens| Document::Pretokenized(tokens.clone()))
            .collect();
        let batches = self.pipeline.process_batch(&docs)?;
        Ok(batches.into_iter().map(Self::convert).collect())
    }
}
