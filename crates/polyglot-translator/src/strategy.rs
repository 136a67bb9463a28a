use std::fmt;
use std::str::FromStr;

use crate::backend::{GenerationParams, ModelBackend};
use crate::cache::{CacheKey, ModelCache};
use crate::error::{BackendError, TranslateError, TranslateResult};

pub const HELSINKI_MODEL_PREFIX: &str = "Helsinki-NLP/opus-mt";
pub const M2M100_MODEL_ID: &str = "facebook/m2m100_418M";
pub const MAX_LENGTH: usize = 512;

/// Language placeholder used in cache keys of the multilingual model, so that
/// every language pair shares one loaded instance.
pub const MULTILINGUAL: &str = "multilingual";

/// The translation models a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelChoice {
    /// One OPUS-MT model per language pair.
    #[default]
    Helsinki,
    /// A single M2M-100 model told the pair on every call.
    M2M100,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::Helsinki, ModelChoice::M2M100];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Helsinki => "Helsinki-NLP (OPUS-MT)",
            Self::M2M100 => "Facebook M2M-100",
        }
    }

    pub fn model_id(&self, source: &str, target: &str) -> String {
        match self {
            Self::Helsinki => format!("{HELSINKI_MODEL_PREFIX}-{source}-{target}"),
            Self::M2M100 => M2M100_MODEL_ID.to_string(),
        }
    }

    pub fn cache_key(&self, source: &str, target: &str) -> CacheKey {
        let model_id = self.model_id(source, target);
        match self {
            Self::Helsinki => CacheKey::new(source, target, model_id),
            Self::M2M100 => CacheKey::new(MULTILINGUAL, MULTILINGUAL, model_id),
        }
    }

    pub fn params(&self, source: &str, target: &str) -> GenerationParams {
        match self {
            Self::Helsinki => GenerationParams {
                max_length: Some(MAX_LENGTH),
                ..Default::default()
            },
            Self::M2M100 => GenerationParams {
                src_lang: Some(source.to_string()),
                tgt_lang: Some(target.to_string()),
                ..Default::default()
            },
        }
    }

    /// Translates `text` with this model, loading it through `cache` as needed.
    pub async fn translate<B: ModelBackend>(
        &self,
        cache: &ModelCache<B>,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<String> {
        let key = self.cache_key(source, target);
        let Some(model) = cache.load_model(&key).await else {
            return Err(TranslateError::ModelUnavailable {
                model: key.model_id,
            });
        };

        let params = self.params(source, target);
        log::debug!("running {} ({source} -> {target})", model.model_id());
        let failed = |e: BackendError| TranslateError::TranslationFailed {
            model: key.model_id.clone(),
            reason: e.to_string(),
        };
        let outputs = model.run(text, &params).await.map_err(failed)?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.translation_text)
            .ok_or_else(|| failed(BackendError::EmptyOutput))
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelChoice {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| TranslateError::InvalidModelChoice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::testing::{Reply, StubBackend};

    #[test]
    fn helsinki_id_names_the_pair() {
        assert_eq!(
            ModelChoice::Helsinki.model_id("en", "fr"),
            "Helsinki-NLP/opus-mt-en-fr"
        );
    }

    #[test]
    fn m2m100_id_ignores_the_pair() {
        let a = ModelChoice::M2M100.model_id("en", "fr");
        let b = ModelChoice::M2M100.model_id("de", "ja");
        assert_eq!(a, M2M100_MODEL_ID);
        assert_eq!(a, b);
        assert_eq!(
            ModelChoice::M2M100.cache_key("en", "fr"),
            ModelChoice::M2M100.cache_key("de", "ja")
        );
    }

    #[test]
    fn labels_parse_back() {
        for choice in ModelChoice::ALL {
            assert_eq!(choice.label().parse::<ModelChoice>(), Ok(choice));
        }
        assert_eq!(
            "DeepL".parse::<ModelChoice>(),
            Err(TranslateError::InvalidModelChoice("DeepL".into()))
        );
    }

    #[test]
    fn unavailable_pair_reports_fixed_message() {
        let cache = ModelCache::new(StubBackend::echo().without("Helsinki-NLP/opus-mt-en-fr"));

        let err = block_on(ModelChoice::Helsinki.translate(&cache, "Hello", "en", "fr")).unwrap_err();

        assert_eq!(err.to_string(), "Model not available for this language pair.");
        assert_eq!(
            cache.backend().loads.borrow().as_slice(),
            ["Helsinki-NLP/opus-mt-en-fr"]
        );
        assert_eq!(cache.backend().run_count(), 0);
    }

    #[test]
    fn helsinki_bounds_output_length() {
        let cache = ModelCache::new(StubBackend::new(Reply::Fixed("Bonjour".into())));

        let out = block_on(ModelChoice::Helsinki.translate(&cache, "Hello", "en", "fr")).unwrap();

        assert_eq!(out, "Bonjour");
        let model = block_on(cache.load_model(&ModelChoice::Helsinki.cache_key("en", "fr"))).unwrap();
        assert_eq!(model.model_id(), "Helsinki-NLP/opus-mt-en-fr");
        let runs = cache.backend().runs.borrow();
        let (model, text, params) = &runs[0];
        assert_eq!(model, "Helsinki-NLP/opus-mt-en-fr");
        assert_eq!(text, "Hello");
        assert_eq!(params.max_length, Some(MAX_LENGTH));
        assert_eq!(params.src_lang, None);
    }

    #[test]
    fn m2m100_passes_languages_per_call() {
        let cache = ModelCache::new(StubBackend::echo());

        block_on(ModelChoice::M2M100.translate(&cache, "Hello", "en", "fr")).unwrap();
        block_on(ModelChoice::M2M100.translate(&cache, "Hallo", "de", "ja")).unwrap();

        assert_eq!(
            cache.backend().loads.borrow().as_slice(),
            [M2M100_MODEL_ID]
        );
        let runs = cache.backend().runs.borrow();
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|(model, _, _)| model == M2M100_MODEL_ID));
        assert_eq!(runs[1].2.src_lang.as_deref(), Some("de"));
        assert_eq!(runs[1].2.tgt_lang.as_deref(), Some("ja"));
        assert_eq!(runs[1].2.max_length, None);
    }

    #[test]
    fn empty_output_is_a_failure() {
        let cache = ModelCache::new(StubBackend::new(Reply::Empty));

        let err = block_on(ModelChoice::M2M100.translate(&cache, "Hello", "en", "fr")).unwrap_err();

        assert!(matches!(err, TranslateError::TranslationFailed { .. }));
    }

    #[test]
    fn run_error_is_reported_with_reason() {
        let cache = ModelCache::new(StubBackend::new(Reply::Fail));

        let err = block_on(ModelChoice::Helsinki.translate(&cache, "Hello", "en", "de")).unwrap_err();

        assert_eq!(
            err,
            TranslateError::TranslationFailed {
                model: "Helsinki-NLP/opus-mt-en-de".into(),
                reason: "HTTP 500".into(),
            }
        );
    }
}
