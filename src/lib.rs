//! Uniform calling convention over heterogeneous NLP preprocessing backends
//!
//! `prepline` normalizes a set of external preprocessing backends (sentence
//! splitters plus several tokenizer families) behind one calling
//! convention. Callers hand any tokenizer a single
//! string, a batch of strings, or pre-tokenized samples; the input shape is
//! classified once at the boundary and routed to the matching single-item
//! or batch-optimized backend call, with shape-consistent results.
//!
//! The crate implements no linguistic model itself. Backends are opaque
//! collaborators reached through the [`backend::Pipeline`] seam, built by a
//! [`backend::PipelineProvider`] and memoized per configuration key in a
//! [`ModelRegistry`].
//!
//! ```
//! use prepline::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let sentence = tokenizer
//!     .tokenize("Mary sold the car to John .", false)
//!     .unwrap()
//!     .into_single()
//!     .unwrap();
//! assert_eq!(sentence.len(), 7);
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod data;
pub mod error;
pub mod input;
pub mod splitters;
pub mod tokenizers;

pub use backend::{Layers, ModelRegistry, PipelineKey};
pub use data::{Argument, Predicate, Sentence, SrlSentence, Synsets, Token, Word};
pub use error::{Error, Result};
pub use input::{RawInput, ShapedInput};
pub use splitters::{PipelineSentenceSplitter, SentenceSplitter, SplitStrategy};
pub use tokenizers::{
    AnnotationConfig, DocPipelineTokenizer, SentPipelineTokenizer, Tokenized, Tokenizer,
    WhitespaceTokenizer,
};
