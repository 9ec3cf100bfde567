//! Sentence collections
//!
//! A [`Sentence`] is an ordered, fixed-identity sequence of [`Token`]
//! slots. [`SrlSentence`] adds slot replacement for Semantic Role Labeling
//! output, where tokenizer-produced words are overwritten by predicates.

use crate::data::word::{Argument, Predicate, Token, Word};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// An ordered sequence of tokens with an opaque id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Opaque sentence identifier
    pub id: Option<String>,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Create an empty sentence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sentence with an id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            tokens: Vec::new(),
        }
    }

    /// Build a sentence from plain words
    pub fn from_words(words: Vec<Word>) -> Self {
        Self {
            id: None,
            tokens: words.into_iter().map(Token::Plain).collect(),
        }
    }

    /// Append a token slot
    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    /// Token at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of token slots
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the token slots in order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The token slots as a slice
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Token {
        &mut self.tokens[index]
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for Sentence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Word> for Sentence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter.into_iter().collect())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            f.write_str(token.text())?;
        }
        write!(f, "]")
    }
}

/// A sentence holding Semantic Role Labeling output
///
/// Starts out as an ordinary tokenized sentence; SRL post-processing then
/// replaces word slots with predicates via [`SrlSentence::add_predicate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrlSentence(Sentence);

impl SrlSentence {
    /// Create an empty SRL sentence
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing tokenized sentence
    pub fn from_sentence(sentence: Sentence) -> Self {
        Self(sentence)
    }

    /// The underlying sentence
    pub fn sentence(&self) -> &Sentence {
        &self.0
    }

    /// Consume the wrapper and return the underlying sentence
    pub fn into_sentence(self) -> Sentence {
        self.0
    }

    /// Append a token slot
    pub fn push(&mut self, token: impl Into<Token>) {
        self.0.push(token);
    }

    /// Number of token slots
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace a slot with a predicate, returning the resolved slot index
    ///
    /// The slot is taken from `index` when given, otherwise inferred from
    /// the predicate's own word index; the resolved index is stamped back
    /// onto the predicate when it lacked one. Fails with
    /// [`Error::MissingPredicateIndex`] when neither side carries an index
    /// and with [`Error::IndexOutOfRange`] when the resolved slot is past
    /// the end of the sentence.
    pub fn add_predicate(&mut self, mut predicate: Predicate, index: Option<usize>) -> Result<usize> {
        let resolved = index
            .or(predicate.word.index)
            .ok_or(Error::MissingPredicateIndex)?;
        if resolved >= self.0.len() {
            return Err(Error::IndexOutOfRange {
                index: resolved,
                len: self.0.len(),
            });
        }
        if predicate.word.index.is_none() {
            predicate.word.index = Some(resolved);
        }
        *self.0.slot_mut(resolved) = Token::Predicate(predicate);
        Ok(resolved)
    }

    /// The predicate at `index`
    ///
    /// Fails with [`Error::IndexOutOfRange`] when out of bounds and with
    /// [`Error::NotAPredicate`] when the slot holds a non-predicate token.
    pub fn get_predicate(&self, index: usize) -> Result<&Predicate> {
        let token = self.0.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.0.len(),
        })?;
        token.as_predicate().ok_or(Error::NotAPredicate(index))
    }

    /// All predicate slots, in sentence order
    pub fn predicates(&self) -> Vec<&Predicate> {
        self.0.iter().filter_map(Token::as_predicate).collect()
    }

    /// Resolve an argument's index span to the tokens it covers.
    pub fn argument_words(&self, argument: &Argument) -> Result<&[Token]> {
        let (start, end) = argument.span();
        if start > end || end > self.0.len() {
            return Err(Error::IndexOutOfRange {
                index: end,
                len: self.0.len(),
            });
        }
        Ok(&self.0.tokens()[start..end])
    }
}

impl Index<usize> for SrlSentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.0[index]
    }
}

impl From<Sentence> for SrlSentence {
    fn from(sentence: Sentence) -> Self {
        Self(sentence)
    }
}

impl fmt::Display for SrlSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
