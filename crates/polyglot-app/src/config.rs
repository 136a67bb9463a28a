const HUB_API_BASE: &str = "https://huggingface.co/api";
const HUB_INFERENCE_BASE: &str = "https://api-inference.huggingface.co";

/// Where models are looked up and run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub api_base: String,
    pub inference_base: String,
    /// Hugging Face access token. Kept in memory only.
    pub access_token: Option<String>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            api_base: HUB_API_BASE.to_string(),
            inference_base: HUB_INFERENCE_BASE.to_string(),
            access_token: None,
        }
    }
}

impl HubConfig {
    pub fn model_info_url(&self, model_id: &str) -> String {
        format!("{}/models/{model_id}", self.api_base.trim_end_matches('/'))
    }

    pub fn inference_url(&self, model_id: &str) -> String {
        format!("{}/models/{model_id}", self.inference_base.trim_end_matches('/'))
    }

    pub fn set_access_token(&mut self, token: &str) {
        let token = token.trim();
        self.access_token = (!token.is_empty()).then(|| token.to_string());
    }
}
