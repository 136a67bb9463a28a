use leptos::prelude::*;

use polyglot_translator::{languages, ModelChoice, TranslateError, TranslateResult, TranslationRequest};

const DEFAULT_SOURCE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    Idle,
    Translating,
    Done,
    Failed,
}

impl TranslationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Translating => "Translating...",
            Self::Done => "Translation completed!",
            Self::Failed => "Translation failed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Idle => "hidden",
            Self::Translating => "badge-loading",
            Self::Done => "badge-ready",
            Self::Failed => "badge-error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    /// Selector value, parsed into a [`ModelChoice`] when a request is made.
    pub model_choice: RwSignal<String>,
    pub source_language: RwSignal<String>,
    pub target_language: RwSignal<String>,
    pub input_text: RwSignal<String>,
    pub translation_text: RwSignal<String>,
    pub status: RwSignal<TranslationStatus>,
    pub error_message: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            model_choice: RwSignal::new(ModelChoice::default().label().to_string()),
            source_language: RwSignal::new(DEFAULT_SOURCE.to_string()),
            target_language: RwSignal::new(
                languages::fallback_target(DEFAULT_SOURCE, "").to_string(),
            ),
            input_text: RwSignal::new(String::new()),
            translation_text: RwSignal::new(String::new()),
            status: RwSignal::new(TranslationStatus::Idle),
            error_message: RwSignal::new(None),
        }
    }

    pub fn set_source(&self, code: String) {
        let target = languages::fallback_target(&code, &self.target_language.get_untracked());
        self.source_language.set(code);
        self.target_language.set(target.to_string());
    }

    pub fn request(&self) -> TranslationRequest {
        TranslationRequest::new(
            self.model_choice.get_untracked(),
            self.source_language.get_untracked(),
            self.target_language.get_untracked(),
            self.input_text.get_untracked(),
        )
    }

    pub fn finish(&self, result: TranslateResult<String>) {
        match result {
            Ok(text) => {
                self.translation_text.set(text);
                self.status.set(TranslationStatus::Done);
            }
            Err(TranslateError::EmptyInput) => {
                self.error_message.set(Some(TranslateError::EmptyInput.to_string()));
                self.status.set(TranslationStatus::Idle);
            }
            Err(e) => {
                self.translation_text.set(e.to_string());
                self.status.set(TranslationStatus::Failed);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
