use thiserror::Error;

/// Outcome of a translation request that did not produce text.
///
/// The `Display` output of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The input was empty or whitespace only.
    #[error("Please enter text to translate.")]
    EmptyInput,

    /// The selector value does not name a known model.
    #[error("Invalid model choice.")]
    InvalidModelChoice(String),

    /// The language code is not in the registry.
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    /// The backend could not provide a model for the requested key.
    #[error("Model not available for this language pair.")]
    ModelUnavailable { model: String },

    /// The model loaded but failed while translating.
    #[error("Translation failed: {reason}")]
    TranslationFailed { model: String, reason: String },
}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors raised by a model backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("model '{0}' not found")]
    NotFound(String),

    #[error("model '{model}' does not support translation (pipeline: {pipeline})")]
    Unsupported { model: String, pipeline: String },

    #[error("HTTP {0}")]
    Http(u16),

    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("model returned no translation")]
    EmptyOutput,
}
