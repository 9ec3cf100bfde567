//! Minimal built-in backend
//!
//! Stands in when a language has no pretrained model: a whitespace token
//! stream plus a punctuation-driven sentencizer. This is the backend behind
//! the forced rule-based downgrade in the sentence splitter.

use crate::backend::{Document, Pipeline, RawSentence, RawToken};
use crate::error::Result;
use regex::Regex;

/// Characters that close a sentence
const TERMINALS: [char; 4] = ['.', '!', '?', '…'];

/// A blank pipeline: whitespace tokens, punctuation sentence boundaries
pub struct BlankPipeline {
    token_regex: Regex,
}

impl BlankPipeline {
    /// Create a blank pipeline
    pub fn new() -> Self {
        Self {
            // \S+ cannot fail to compile
            token_regex: Regex::new(r"\S+").unwrap(),
        }
    }

    /// Sentence spans as byte ranges, boundaries after terminal punctuation
    fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start: Option<usize> = None;
        let mut prev_terminal = false;

        for (i, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if prev_terminal {
                    if let Some(s) = start.take() {
                        spans.push((s, i));
                    }
                    prev_terminal = false;
                }
                continue;
            }
            if start.is_none() {
                start = Some(i);
            }
            prev_terminal = TERMINALS.contains(&ch);
        }
        if let Some(s) = start {
            spans.push((s, text.len()));
        }
        spans
    }

    fn sentencize(&self, text: &str) -> Vec<RawSentence> {
        Self::sentence_spans(text)
            .into_iter()
            .map(|(start, end)| {
                let sentence = &text[start..end];
                let tokens = self
                    .token_regex
                    .find_iter(sentence)
                    .map(|m| RawToken {
                        text: m.as_str().to_owned(),
                        start_char: Some(start + m.start()),
                        end_char: Some(start + m.end()),
                        ..RawToken::default()
                    })
                    .collect();
                RawSentence {
                    text: sentence.to_owned(),
                    tokens,
                }
            })
            .collect()
    }
}

impl Default for BlankPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline for BlankPipeline {
    fn process(&self, doc: &Document) -> Result<Vec<RawSentence>> {
        let text = match doc {
            Document::Text(text) => text.clone(),
            Document::Pretokenized(tokens) => tokens.join(" "),
        };
        Ok(self.sentencize(&text))
    }
}
