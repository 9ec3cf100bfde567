//! Model registry caching and recovery behavior

mod common;

use common::MockProvider;
use prepline::{Error, Layers, ModelRegistry, PipelineKey};
use std::sync::Arc;

#[test]
fn equal_keys_return_the_same_cached_handle() {
    let registry = ModelRegistry::new();
    let provider = MockProvider::new();
    let key = PipelineKey::new("en_core_web_sm");

    let first = registry.get_or_build(&key, &provider).unwrap();
    let second = registry.get_or_build(&key, &provider).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(provider.load_count(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn changing_any_parameter_creates_a_distinct_entry() {
    let registry = ModelRegistry::new();
    let provider = MockProvider::new();
    let base = PipelineKey::new("en_core_web_sm");

    let with_pos = PipelineKey {
        layers: Layers {
            pos: true,
            ..Layers::default()
        },
        ..base.clone()
    };
    let on_gpu = PipelineKey {
        gpu: true,
        ..base.clone()
    };

    let a = registry.get_or_build(&base, &provider).unwrap();
    let b = registry.get_or_build(&with_pos, &provider).unwrap();
    let c = registry.get_or_build(&on_gpu, &provider).unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(provider.load_count(), 3);
    assert_eq!(registry.len(), 3);
}

#[test]
fn missing_model_is_downloaded_once_then_retried() {
    let registry = ModelRegistry::new();
    let provider = MockProvider::new().missing();
    let key = PipelineKey::new("en_core_web_sm");

    let pipeline = registry.get_or_build(&key, &provider);
    assert!(pipeline.is_ok());
    assert_eq!(provider.download_count(), 1);
    assert_eq!(provider.load_count(), 2);

    // Cached now; neither load nor download runs again.
    registry.get_or_build(&key, &provider).unwrap();
    assert_eq!(provider.load_count(), 2);
}

#[test]
fn second_load_failure_is_fatal() {
    let registry = ModelRegistry::new();
    let provider = MockProvider::new().broken();
    let key = PipelineKey::new("xx_sent_ud_sm");

    let err = registry.get_or_build(&key, &provider).unwrap_err();
    assert!(matches!(err, Error::ModelNotFound(model) if model == "xx_sent_ud_sm"));
    assert_eq!(provider.download_count(), 1);
    assert_eq!(provider.load_count(), 2);
    assert!(registry.is_empty());
}
