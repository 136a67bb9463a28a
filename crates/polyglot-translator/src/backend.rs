use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BackendError;

/// Call-time parameters forwarded to a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOutput {
    pub translation_text: String,
}

/// A loaded, ready to call translation model.
#[async_trait(?Send)]
pub trait TranslationModel {
    fn model_id(&self) -> &str;

    async fn run(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<TranslationOutput>, BackendError>;
}

/// Source of translation models. Loading may be slow and may touch the network.
#[async_trait(?Send)]
pub trait ModelBackend {
    async fn load(&self, model_id: &str) -> Result<Rc<dyn TranslationModel>, BackendError>;
}
