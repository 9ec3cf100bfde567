//! Input shape classification
//!
//! Every tokenizer accepts a single string, a batch of strings, or
//! pre-tokenized (already word-split) samples. [`RawInput`] captures what a
//! caller can hand us; [`ShapedInput::classify`] resolves the ambiguity a
//! flat string list carries (batch of texts vs. one pre-tokenized sample)
//! into a closed union that downstream code matches exhaustively.

use crate::error::{Error, Result};

/// Loosely-shaped caller input, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// One plain text
    Text(String),
    /// A flat list of strings: a batch of texts, or one pre-tokenized
    /// sample when `is_split_into_words` is set
    Segments(Vec<String>),
    /// A nested list: a batch of pre-tokenized samples
    NestedSegments(Vec<Vec<String>>),
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_owned())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<Vec<String>> for RawInput {
    fn from(segments: Vec<String>) -> Self {
        RawInput::Segments(segments)
    }
}

impl From<Vec<&str>> for RawInput {
    fn from(segments: Vec<&str>) -> Self {
        RawInput::Segments(segments.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<Vec<String>>> for RawInput {
    fn from(batches: Vec<Vec<String>>) -> Self {
        RawInput::NestedSegments(batches)
    }
}

impl From<Vec<Vec<&str>>> for RawInput {
    fn from(batches: Vec<Vec<&str>>) -> Self {
        RawInput::NestedSegments(
            batches
                .into_iter()
                .map(|tokens| tokens.into_iter().map(str::to_owned).collect())
                .collect(),
        )
    }
}

/// Classified input: exactly one of the four supported shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedInput {
    /// One plain text sample
    SingleText(String),
    /// A batch of independent text samples
    BatchOfText(Vec<String>),
    /// One pre-tokenized sample
    SingleTokenList(Vec<String>),
    /// A batch of pre-tokenized samples
    BatchOfTokenLists(Vec<Vec<String>>),
}

impl ShapedInput {
    /// Classify raw input into one of the supported shapes
    ///
    /// A plain string is always a single sample. A flat string list is a
    /// batch of texts, unless `is_split_into_words` marks it as one
    /// pre-tokenized sample. A nested list is a batch of pre-tokenized
    /// samples and requires the flag; without it the shape is rejected.
    /// Deterministic and side-effect-free.
    pub fn classify(input: RawInput, is_split_into_words: bool) -> Result<Self> {
        match (input, is_split_into_words) {
            (RawInput::Text(text), _) => Ok(ShapedInput::SingleText(text)),
            (RawInput::Segments(segments), false) => Ok(ShapedInput::BatchOfText(segments)),
            (RawInput::Segments(tokens), true) => Ok(ShapedInput::SingleTokenList(tokens)),
            (RawInput::NestedSegments(batches), true) => {
                Ok(ShapedInput::BatchOfTokenLists(batches))
            }
            (RawInput::NestedSegments(_), false) => Err(Error::InvalidInput(
                "nested token lists require `is_split_into_words`".into(),
            )),
        }
    }

    /// Whether the classified input is a batch of independent samples
    pub fn is_batched(&self) -> bool {
        matches!(
            self,
            ShapedInput::BatchOfText(_) | ShapedInput::BatchOfTokenLists(_)
        )
    }
}
