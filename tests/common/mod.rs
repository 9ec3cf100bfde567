//! Shared mock backend for integration tests
//!
//! The mock pipeline whitespace-tokenizes its input and closes a sentence
//! after every period, enough to exercise dispatch, conversion, and
//! post-processing without a real model.

// Not every test binary uses every helper.
#![allow(dead_code)]

use prepline::backend::{Document, Pipeline, PipelineKey, PipelineProvider, RawSentence, RawToken};
use prepline::{Error, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Deterministic annotating pipeline
#[derive(Default)]
pub struct MockPipeline {
    /// Return empty lemmas to exercise the surface-text fallback
    pub empty_lemmas: bool,
    /// Fail any document whose text contains this marker
    pub poison: Option<String>,
    pub process_calls: AtomicUsize,
    pub batch_calls: AtomicUsize,
    pub seen_docs: Mutex<Vec<Document>>,
}

impl MockPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn analyze(&self, doc: &Document) -> Result<Vec<RawSentence>> {
        let text = match doc {
            Document::Text(text) => text.clone(),
            Document::Pretokenized(tokens) => tokens.join(" "),
        };
        if let Some(marker) = &self.poison {
            if text.contains(marker.as_str()) {
                return Err(Error::Backend(format!("poisoned document: {marker}")));
            }
        }
        Ok(text
            .split_inclusive('.')
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| RawSentence {
                text: segment.to_owned(),
                tokens: segment
                    .split_whitespace()
                    .map(|token| RawToken {
                        text: token.to_owned(),
                        lemma: Some(if self.empty_lemmas {
                            String::new()
                        } else {
                            token.to_lowercase()
                        }),
                        pos: Some("X".to_owned()),
                        dep: Some("dep".to_owned()),
                        head: Some(0),
                        ..RawToken::default()
                    })
                    .collect(),
            })
            .collect())
    }
}

impl Pipeline for MockPipeline {
    fn process(&self, doc: &Document) -> Result<Vec<RawSentence>> {
        self.process_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_docs.lock().unwrap().push(doc.clone());
        self.analyze(doc)
    }

    fn process_batch(&self, docs: &[Document]) -> Result<Vec<Vec<RawSentence>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_docs.lock().unwrap().extend(docs.iter().cloned());
        docs.iter().map(|doc| self.analyze(doc)).collect()
    }
}

/// Provider handing out [`MockPipeline`]s, with install-state knobs
#[derive(Default)]
pub struct MockProvider {
    /// Build pipelines that return empty lemmas
    pub empty_lemmas: bool,
    /// Build pipelines that fail on this marker
    pub poison: Option<String>,
    /// Model is not installed until `download` runs
    pub missing: bool,
    /// Model stays missing even after a download
    pub broken: bool,
    pub loads: AtomicUsize,
    pub downloads: AtomicUsize,
    downloaded: AtomicBool,
    pub last_key: Mutex<Option<PipelineKey>>,
    pub last_pipeline: Mutex<Option<Arc<MockPipeline>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(mut self) -> Self {
        self.missing = true;
        self
    }

    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    pub fn with_empty_lemmas(mut self) -> Self {
        self.empty_lemmas = true;
        self
    }

    pub fn with_poison(mut self, marker: &str) -> Self {
        self.poison = Some(marker.to_owned());
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn last_key(&self) -> Option<PipelineKey> {
        self.last_key.lock().unwrap().clone()
    }

    pub fn pipeline(&self) -> Arc<MockPipeline> {
        self.last_pipeline
            .lock()
            .unwrap()
            .clone()
            .expect("no pipeline built yet")
    }
}

impl PipelineProvider for MockProvider {
    fn load(&self, key: &PipelineKey) -> Result<Arc<dyn Pipeline>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        *self.last_key.lock().unwrap() = Some(key.clone());
        if self.broken || (self.missing && !self.downloaded.load(Ordering::SeqCst)) {
            return Err(Error::ModelNotFound(key.model.clone()));
        }
        let pipeline = Arc::new(MockPipeline {
            empty_lemmas: self.empty_lemmas,
            poison: self.poison.clone(),
            ..MockPipeline::default()
        });
        *self.last_pipeline.lock().unwrap() = Some(Arc::clone(&pipeline));
        Ok(pipeline)
    }

    fn download(&self, _key: &PipelineKey) -> Result<()> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        self.downloaded.store(true, Ordering::SeqCst);
        Ok(())
    }
}
