//! Whitespace tokenizer

use crate::data::{Sentence, Word};
use crate::error::Result;
use crate::tokenizers::Tokenizer;
use regex::Regex;

/// A tokenizer that splits text on runs of whitespace
///
/// Each `\S+` run becomes one [`Word`] carrying its byte offsets into the
/// source text. No backend and no annotation layers are involved.
pub struct WhitespaceTokenizer {
    finditer_regex: Regex,
}

impl WhitespaceTokenizer {
    /// Create a whitespace tokenizer
    pub fn new() -> Self {
        Self {
            // \S+ cannot fail to compile
            finditer_regex: Regex::new(r"\S+").unwrap(),
        }
    }
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize_text(&self, text: &str) -> Result<Sentence> {
        Ok(self
            .finditer_regex
            .find_iter(text)
            .enumerate()
            .map(|(i, m)| Word::with_span(m.as_str(), i, m.start(), m.end()))
            .collect())
    }

    /// Pre-tokenized input is rejoined with single spaces and re-split.
    /// Lossy when the original inter-token spacing mattered; the offsets
    /// refer to the rejoined string.
    fn tokenize_tokens(&self, tokens: &[String]) -> Result<Sentence> {
        self.tokenize_text(&tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_carry_contiguous_indices_and_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let text = "Mary  sold the car to John .";
        let sentence = tokenizer.tokenize_text(text).unwrap();

        assert_eq!(sentence.len(), 7);
        for (i, token) in sentence.iter().enumerate() {
            let word = token.word();
            assert_eq!(word.index, Some(i));
            let (start, end) = (word.start_char.unwrap(), word.end_char.unwrap());
            assert_eq!(&text[start..end], word.text);
        }
    }

    #[test]
    fn pretokenized_input_is_rejoined() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<String> = ["Mary", "sold", "the", "car"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let sentence = tokenizer.tokenize_tokens(&tokens).unwrap();

        assert_eq!(sentence.len(), 4);
        assert_eq!(sentence[3].text(), "car");
        assert_eq!(sentence[3].word().start_char, Some(14));
    }

    #[test]
    fn empty_text_yields_an_empty_sentence() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(tokenizer.tokenize_text("   ").unwrap().is_empty());
    }
}
