//! Model registry
//!
//! Backend construction is expensive (model load, possibly a download), so
//! pipelines are memoized by their full configuration key. The registry is
//! an owned object injected into component constructors, not ambient
//! state; the key space is small and entries are static, so the map is
//! unbounded and append-only.

use crate::backend::{Pipeline, PipelineProvider};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Annotation layers enabled on a backend pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Layers {
    /// Part-of-speech tagging
    pub pos: bool,
    /// Lemmatization
    pub lemma: bool,
    /// Dependency parsing
    pub parse: bool,
    /// Trained sentence-boundary detection
    pub senter: bool,
    /// Punctuation-driven sentence boundaries
    pub sentencizer: bool,
}

/// Canonical configuration key for one backend pipeline
///
/// Covers every parameter that affects backend behavior; two equal keys
/// always resolve to the same cached handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PipelineKey {
    /// Resolved model name (or bare language code for backends without a
    /// model table)
    pub model: String,
    /// Enabled annotation layers
    pub layers: Layers,
    /// Whether the backend expects caller-tokenized input
    pub pretokenized: bool,
    /// Whether the model is placed on the GPU
    pub gpu: bool,
}

impl PipelineKey {
    /// Key for `model` with all layers disabled
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            layers: Layers::default(),
            pretokenized: false,
            gpu: false,
        }
    }
}

/// Process-wide cache of constructed backend pipelines
#[derive(Default)]
pub struct ModelRegistry {
    cache: Mutex<HashMap<PipelineKey, Arc<dyn Pipeline>>>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the pipeline for `key`, constructing it through `provider` on
    /// a miss
    ///
    /// A model-not-found failure triggers exactly one download-and-install
    /// through the provider followed by one retry; a second failure
    /// propagates unchanged. The lock is held across the whole
    /// check-then-insert, so concurrent callers never construct the same
    /// key twice.
    pub fn get_or_build(
        &self,
        key: &PipelineKey,
        provider: &dyn PipelineProvider,
    ) -> Result<Arc<dyn Pipeline>> {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(pipeline) = cache.get(key) {
            return Ok(Arc::clone(pipeline));
        }

        let pipeline = match provider.load(key) {
            Ok(pipeline) => pipeline,
            Err(Error::ModelNotFound(model)) => {
                log::warn!("model '{model}' not found, downloading and installing");
                provider.download(key)?;
                provider.load(key)?
            }
            Err(err) => return Err(err),
        };

        cache.insert(key.clone(), Arc::clone(&pipeline));
        Ok(pipeline)
    }

    /// Number of cached pipelines
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the registry holds no pipelines
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("entries", &self.len())
            .finish()
    }
}
