use crate::backend::ModelBackend;
use crate::cache::ModelCache;
use crate::error::{TranslateError, TranslateResult};
use crate::languages;
use crate::strategy::ModelChoice;

/// A single user request, as collected from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Selector value naming the model, see [`ModelChoice::label`].
    pub model: String,
    pub source: String,
    pub target: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(
        model: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            source: source.into(),
            target: target.into(),
            text: text.into(),
        }
    }

    /// Checks the request without touching any model.
    pub fn validate(&self) -> TranslateResult<ModelChoice> {
        if self.text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        let choice = self.model.parse::<ModelChoice>()?;
        for code in [&self.source, &self.target] {
            if !languages::is_supported(code) {
                return Err(TranslateError::UnknownLanguage(code.clone()));
            }
        }
        Ok(choice)
    }
}

/// Validates requests and dispatches them to the chosen model.
pub struct Translator<B> {
    cache: ModelCache<B>,
}

impl<B: ModelBackend> Translator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            cache: ModelCache::new(backend),
        }
    }

    pub fn cache(&self) -> &ModelCache<B> {
        &self.cache
    }

    pub async fn submit(&self, request: &TranslationRequest) -> TranslateResult<String> {
        let choice = request.validate()?;
        log::info!(
            "translating {} chars {} -> {} with {choice}",
            request.text.chars().count(),
            request.source,
            request.target
        );

        let result = choice
            .translate(&self.cache, &request.text, &request.source, &request.target)
            .await;
        match &result {
            Ok(text) => log::debug!("translation done ({} chars)", text.chars().count()),
            Err(e) => log::debug!("translation not produced: {e}"),
        }
        result
    }
}
