//! Pipeline-backed sentence splitter

use crate::backend::{
    BlankPipeline, Document, Layers, ModelRegistry, Pipeline, PipelineKey, PipelineProvider,
    RawSentence,
};
use crate::error::{Error, Result};
use crate::splitters::SentenceSplitter;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Language → sentence-segmentation model for the splitter backend
///
/// Most languages share the multilingual sentence model; a few have a
/// dedicated one.
const SPLITTER_MODELS: &[(&str, &str)] = &[
    ("cs", "xx_sent_ud_sm"),
    ("da", "xx_sent_ud_sm"),
    ("de", "xx_sent_ud_sm"),
    ("el", "el_core_news_sm"),
    ("en", "xx_sent_ud_sm"),
    ("es", "xx_sent_ud_sm"),
    ("fa", "xx_sent_ud_sm"),
    ("fi", "xx_sent_ud_sm"),
    ("fr", "xx_sent_ud_sm"),
    ("ga", "xx_sent_ud_sm"),
    ("hr", "xx_sent_ud_sm"),
    ("id", "xx_sent_ud_sm"),
    ("it", "xx_sent_ud_sm"),
    ("ja", "ja_core_news_sm"),
    ("lt", "xx_sent_ud_sm"),
    ("lv", "xx_sent_ud_sm"),
    ("mr", "xx_sent_ud_sm"),
    ("nb", "xx_sent_ud_sm"),
    ("nl", "xx_sent_ud_sm"),
    ("no", "xx_sent_ud_sm"),
    ("pl", "pl_core_news_sm"),
    ("pt", "xx_sent_ud_sm"),
    ("ro", "xx_sent_ud_sm"),
    ("ru", "xx_sent_ud_sm"),
    ("sk", "xx_sent_ud_sm"),
    ("sr", "xx_sent_ud_sm"),
    ("sv", "xx_sent_ud_sm"),
    ("te", "xx_sent_ud_sm"),
    ("vi", "xx_sent_ud_sm"),
    ("zh", "zh_core_web_sm"),
];

const STRATEGY_NAMES: &[&str] = &["dependency", "statistical", "rule_based"];

/// Boundary-detection strategy for the sentence splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitStrategy {
    /// Full dependency parse; slow, most accurate. The parser must be
    /// enabled at backend construction and cannot be toggled per call.
    Dependency,
    /// Trained sentence-boundary-detection layer
    #[default]
    Statistical,
    /// Punctuation-driven segmenter; fast, small footprint
    RuleBased,
}

impl SplitStrategy {
    fn layers(self) -> Layers {
        match self {
            SplitStrategy::Dependency => Layers {
                parse: true,
                ..Layers::default()
            },
            SplitStrategy::Statistical => Layers {
                senter: true,
                ..Layers::default()
            },
            SplitStrategy::RuleBased => Layers {
                sentencizer: true,
                ..Layers::default()
            },
        }
    }

    /// The strategy's configuration name
    pub fn name(self) -> &'static str {
        match self {
            SplitStrategy::Dependency => "dependency",
            SplitStrategy::Statistical => "statistical",
            SplitStrategy::RuleBased => "rule_based",
        }
    }
}

impl FromStr for SplitStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dependency" => Ok(SplitStrategy::Dependency),
            "statistical" => Ok(SplitStrategy::Statistical),
            "rule_based" => Ok(SplitStrategy::RuleBased),
            other => Err(Error::UnsupportedOption {
                value: other.to_owned(),
                valid: STRATEGY_NAMES,
            }),
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sentence splitter backed by an external segmentation pipeline
///
/// When the requested language has no model entry, a blank backend is
/// built instead and the strategy is downgraded to rule-based, whatever
/// was requested.
pub struct PipelineSentenceSplitter {
    pipeline: Arc<dyn Pipeline>,
    strategy: SplitStrategy,
    max_len: usize,
}

impl PipelineSentenceSplitter {
    /// Build a splitter for `language` with `strategy` and no length limit
    pub fn new(
        language: &str,
        strategy: SplitStrategy,
        registry: &ModelRegistry,
        provider: &dyn PipelineProvider,
    ) -> Result<Self> {
        Self::with_max_len(language, strategy, 0, registry, provider)
    }

    /// Build a splitter that additionally re-chunks long sentences
    ///
    /// Sentences longer than `max_len` characters are sliced into
    /// fixed-size chunks after segmentation; 0 disables the limit.
    pub fn with_max_len(
        language: &str,
        strategy: SplitStrategy,
        max_len: usize,
        registry: &ModelRegistry,
        provider: &dyn PipelineProvider,
    ) -> Result<Self> {
        let model = SPLITTER_MODELS
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, model)| *model);

        let (pipeline, strategy) = match model {
            Some(model) => {
                let key = PipelineKey {
                    model: model.to_owned(),
                    layers: strategy.layers(),
                    pretokenized: false,
                    gpu: false,
                };
                (registry.get_or_build(&key, provider)?, strategy)
            }
            // No pretrained model for this language: blank backend, forced
            // rule-based segmentation.
            None => (
                Arc::new(BlankPipeline::new()) as Arc<dyn Pipeline>,
                SplitStrategy::RuleBased,
            ),
        };

        Ok(Self {
            pipeline,
            strategy,
            max_len,
        })
    }

    /// The strategy actually in effect (after any downgrade)
    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// The configured maximum sentence length, 0 when disabled
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Slice `text` into `n`-character chunks
    ///
    /// A blind character-count split, not boundary-aware; concatenating
    /// the chunks reproduces `text` exactly.
    fn chunked(text: &str, n: usize) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        chars.chunks(n).map(|chunk| chunk.iter().collect()).collect()
    }

    fn postprocess(&self, sentences: Vec<RawSentence>) -> Vec<String> {
        let trimmed = sentences.into_iter().map(|s| s.text.trim().to_owned());
        if self.max_len > 0 {
            trimmed
                .flat_map(|sentence| Self::chunked(&sentence, self.max_len))
                .collect()
        } else {
            trimmed.collect()
        }
    }
}

impl SentenceSplitter for PipelineSentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        let sentences = self.pipeline.process(&Document::Text(text.to_owned()))?;
        Ok(self.postprocess(sentences))
    }

    fn split_batch(&self, texts: &[String]) -> Result<Vec<Vec<String>>> {
        let docs: Vec<Document> = texts
            .iter()
            .map(|text| Document::Text(text.clone()))
            .collect();
        let batches = self.pipeline.process_batch(&docs)?;
        Ok(batches
            .into_iter()
            .map(|sentences| self.postprocess(sentences))
            .collect())
    }
}
