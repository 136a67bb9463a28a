//! Model selection and translation dispatch for Polyglot.
//!
//! Two model families are supported: pair-specific OPUS-MT models, one per
//! source/target combination, and the multilingual M2M-100 model which is
//! told the language pair on every call. Models come from a [`ModelBackend`]
//! and are kept in a [`ModelCache`] once loaded.

pub mod backend;
pub mod cache;
pub mod error;
pub mod languages;
pub mod strategy;
pub mod translator;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{GenerationParams, ModelBackend, TranslationModel, TranslationOutput};
pub use cache::{CacheKey, ModelCache};
pub use error::{BackendError, TranslateError, TranslateResult};
pub use languages::{display_name, list_languages, Language};
pub use strategy::ModelChoice;
pub use translator::{TranslationRequest, Translator};
