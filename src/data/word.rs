//! Word-level annotation records
//!
//! A single [`Word`] carries the surface form plus whatever annotation
//! layers the producing backend had enabled. Task-specific extensions
//! (word-sense labels, SRL predicates) are composed through the [`Token`]
//! variant rather than subclassing, so a predicate stays usable wherever a
//! word is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A word with its preprocessing annotations
///
/// All annotation fields are optional; a backend only fills the layers it
/// was asked to produce. `start_char`/`end_char` are byte offsets into the
/// source text, with `start_char <= end_char` whenever both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Surface form
    pub text: String,
    /// 0-based position within the owning sentence
    pub index: Option<usize>,
    /// Byte offset of the first byte in the source text
    pub start_char: Option<usize>,
    /// Byte offset one past the last byte in the source text
    pub end_char: Option<usize>,
    /// Lemma of the word
    pub lemma: Option<String>,
    /// Coarse-grained part of speech
    pub pos: Option<String>,
    /// Dependency relation label
    pub dep: Option<String>,
    /// Index of the syntactic head within the sentence
    pub head: Option<usize>,
}

impl Word {
    /// Create a word with just a surface form and position
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index: Some(index),
            ..Self::default()
        }
    }

    /// Create a word with a surface form, position, and char span
    pub fn with_span(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index: Some(index),
            start_char: Some(start),
            end_char: Some(end),
            ..Self::default()
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Word-sense labels for one token, one per sense inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synsets {
    /// BabelNet synset label
    pub babelnet: Option<String>,
    /// WordNet synset label
    pub wordnet: Option<String>,
    /// WordNet synset label in the NLTK format
    pub nltk: Option<String>,
}

/// A Semantic Role Labeling predicate: a word plus its sense and arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// The underlying word record
    pub word: Word,
    /// Predicate-sense label
    pub sense: Option<String>,
    /// Argument spans of this predicate, in order
    pub arguments: Vec<Argument>,
}

impl Predicate {
    /// Create a predicate from a word, without sense or arguments
    pub fn new(word: Word) -> Self {
        Self {
            word,
            sense: None,
            arguments: Vec::new(),
        }
    }

    /// Create a predicate with a sense label
    pub fn with_sense(word: Word, sense: impl Into<String>) -> Self {
        Self {
            word,
            sense: Some(sense.into()),
            arguments: Vec::new(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word.text)
    }
}

/// A Semantic Role Labeling argument span
///
/// Relations are non-owning: the predicate and the member words are
/// addressed by their slot indices in the owning sentence, keeping
/// ownership rooted at the sentence itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Role label of the span
    pub role: String,
    /// Sentence slot of the predicate this argument belongs to
    pub predicate_index: usize,
    /// First word of the span (inclusive)
    pub start_index: usize,
    /// One past the last word of the span (exclusive)
    pub end_index: usize,
}

impl Argument {
    /// Create an argument span
    pub fn new(
        role: impl Into<String>,
        predicate_index: usize,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        Self {
            role: role.into(),
            predicate_index,
            start_index,
            end_index,
        }
    }

    /// The (start, end) span boundaries
    pub fn span(&self) -> (usize, usize) {
        (self.start_index, self.end_index)
    }
}

/// One sentence slot: a plain word or a task-annotated variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A word with no task-specific annotations
    Plain(Word),
    /// A word carrying word-sense labels
    Sense {
        /// The underlying word record
        word: Word,
        /// Sense-inventory labels
        synsets: Synsets,
    },
    /// An SRL predicate
    Predicate(Predicate),
}

impl Token {
    /// The underlying word record, whatever the variant
    pub fn word(&self) -> &Word {
        match self {
            Token::Plain(word) => word,
            Token::Sense { word, .. } => word,
            Token::Predicate(predicate) => &predicate.word,
        }
    }

    /// Mutable access to the underlying word record
    pub fn word_mut(&mut self) -> &mut Word {
        match self {
            Token::Plain(word) => word,
            Token::Sense { word, .. } => word,
            Token::Predicate(predicate) => &mut predicate.word,
        }
    }

    /// Surface form of the underlying word
    pub fn text(&self) -> &str {
        &self.word().text
    }

    /// The predicate, if this slot holds one
    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Token::Predicate(predicate) => Some(predicate),
            _ => None,
        }
    }

    /// Whether this slot holds a predicate
    pub fn is_predicate(&self) -> bool {
        matches!(self, Token::Predicate(_))
    }
}

impl From<Word> for Token {
    fn from(word: Word) -> Self {
        Token::Plain(word)
    }
}

impl From<Predicate> for Token {
    fn from(predicate: Predicate) -> Self {
        Token::Predicate(predicate)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
