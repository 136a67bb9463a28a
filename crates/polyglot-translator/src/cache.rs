use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::backend::{ModelBackend, TranslationModel};

/// Identifies one loaded model instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: String,
    pub target: String,
    pub model_id: String,
}

impl CacheKey {
    pub fn new(source: &str, target: &str, model_id: impl Into<String>) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            model_id: model_id.into(),
        }
    }
}

/// Models loaded from a backend, kept for the lifetime of the cache.
///
/// Failed loads are not remembered; the next request for the same key asks
/// the backend again.
pub struct ModelCache<B> {
    backend: B,
    entries: RefCell<HashMap<CacheKey, Rc<dyn TranslationModel>>>,
}

impl<B: ModelBackend> ModelCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the model for `key`, loading it on first use.
    ///
    /// `None` means the backend could not provide the model.
    pub async fn load_model(&self, key: &CacheKey) -> Option<Rc<dyn TranslationModel>> {
        if let Some(model) = self.entries.borrow().get(key) {
            log::debug!("model cache hit: {}", key.model_id);
            return Some(Rc::clone(model));
        }

        log::debug!(
            "model cache miss: {} ({} -> {})",
            key.model_id,
            key.source,
            key.target
        );
        match self.backend.load(&key.model_id).await {
            Ok(model) => {
                // Another request may have finished loading the same key while
                // this one was waiting; keep whichever landed first.
                let mut entries = self.entries.borrow_mut();
                let model = entries.entry(key.clone()).or_insert(model);
                Some(Rc::clone(model))
            }
            Err(e) => {
                log::warn!("failed to load model {}: {e}", key.model_id);
                None
            }
        }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::testing::StubBackend;

    #[test]
    fn repeated_load_reuses_handle() {
        let cache = ModelCache::new(StubBackend::echo());
        let key = CacheKey::new("en", "fr", "Helsinki-NLP/opus-mt-en-fr");

        let first = block_on(cache.load_model(&key)).unwrap();
        let second = block_on(cache.load_model(&key)).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.backend().load_count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_load_separately() {
        let cache = ModelCache::new(StubBackend::echo());
        let a = CacheKey::new("en", "fr", "Helsinki-NLP/opus-mt-en-fr");
        let b = CacheKey::new("fr", "en", "Helsinki-NLP/opus-mt-fr-en");

        block_on(cache.load_model(&a)).unwrap();
        block_on(cache.load_model(&b)).unwrap();

        assert_eq!(cache.backend().load_count(), 2);
        assert!(cache.contains(&a));
        assert!(cache.contains(&b));
    }

    #[test]
    fn failed_load_is_retried() {
        let cache = ModelCache::new(StubBackend::echo().without("Helsinki-NLP/opus-mt-mr-bg"));
        let key = CacheKey::new("mr", "bg", "Helsinki-NLP/opus-mt-mr-bg");

        assert!(block_on(cache.load_model(&key)).is_none());
        assert!(block_on(cache.load_model(&key)).is_none());

        assert_eq!(cache.backend().load_count(), 2);
        assert!(cache.is_empty());
    }
}
