//! Common word/sentence data model shared by every backend wrapper

mod sentence;
mod word;

pub use sentence::{Sentence, SrlSentence};
pub use word::{Argument, Predicate, Synsets, Token, Word};
