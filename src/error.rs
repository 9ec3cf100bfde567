//! Crate-wide error types

use thiserror::Error;

/// Error type for all preprocessing operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not match any supported shape
    #[error("invalid input shape: {0}")]
    InvalidInput(String),

    /// Requested language has no entry in a required language table
    #[error("language '{code}' not supported; supported languages are {supported:?}")]
    UnsupportedLanguage {
        /// The language code that is not supported
        code: String,
        /// The codes the component does support
        supported: &'static [&'static str],
    },

    /// Unrecognized strategy or mode name
    #[error("option '{value}' not supported; choose one of {valid:?}")]
    UnsupportedOption {
        /// The offending value
        value: String,
        /// The accepted values
        valid: &'static [&'static str],
    },

    /// Slot access past the end of a sentence
    #[error("index out of range: provided index is {index}, sentence length is {len}")]
    IndexOutOfRange {
        /// The requested slot
        index: usize,
        /// The sentence length
        len: usize,
    },

    /// Neither the caller nor the predicate carried a slot index
    #[error("cannot infer index of predicate")]
    MissingPredicateIndex,

    /// The addressed slot does not hold a predicate
    #[error("index {0} is not a predicate")]
    NotAPredicate(usize),

    /// Backend model is not installed locally
    #[error("model '{0}' not found")]
    ModelNotFound(String),

    /// Opaque failure reported by a backend pipeline
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for all preprocessing operations
pub type Result<T> = std::result::Result<T, Error>;
