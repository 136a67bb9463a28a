use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use polyglot_translator::{
    BackendError, GenerationParams, ModelBackend, TranslationModel, TranslationOutput,
};

use crate::config::HubConfig;

const TRANSLATION_PIPELINES: &[&str] = &["translation", "text2text-generation"];

#[derive(Debug, Deserialize)]
struct ModelInfo {
    #[serde(default)]
    pipeline_tag: Option<String>,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// Loads models from the Hugging Face Hub and runs them on its inference API.
#[derive(Clone, Default)]
pub struct HubBackend {
    config: Rc<RefCell<HubConfig>>,
}

impl HubBackend {
    pub fn new(config: HubConfig) -> Self {
        Self {
            config: Rc::new(RefCell::new(config)),
        }
    }

    pub fn config(&self) -> HubConfig {
        self.config.borrow().clone()
    }

    pub fn set_access_token(&self, token: &str) {
        self.config.borrow_mut().set_access_token(token);
    }
}

#[async_trait(?Send)]
impl ModelBackend for HubBackend {
    async fn load(&self, model_id: &str) -> Result<Rc<dyn TranslationModel>, BackendError> {
        let (url, token) = {
            let config = self.config.borrow();
            (config.model_info_url(model_id), config.access_token.clone())
        };
        log::info!("looking up {model_id}");

        let request = build_request("GET", &url, None, token.as_deref())?;
        let response = send(&request).await?;
        match response.status() {
            200 => {}
            // The Hub answers 401 for repositories that do not exist.
            401 | 404 => return Err(BackendError::NotFound(model_id.to_string())),
            status => return Err(BackendError::Http(status)),
        }

        let info: ModelInfo = read_json(&response).await?;
        if let Some(pipeline) = info.pipeline_tag {
            if !TRANSLATION_PIPELINES.contains(&pipeline.as_str()) {
                return Err(BackendError::Unsupported {
                    model: model_id.to_string(),
                    pipeline,
                });
            }
        }

        Ok(Rc::new(HubModel {
            model_id: model_id.to_string(),
            config: Rc::clone(&self.config),
        }))
    }
}

struct HubModel {
    model_id: String,
    config: Rc<RefCell<HubConfig>>,
}

#[async_trait(?Send)]
impl TranslationModel for HubModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn run(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<TranslationOutput>, BackendError> {
        let (url, token) = {
            let config = self.config.borrow();
            (config.inference_url(&self.model_id), config.access_token.clone())
        };

        let body = to_json(&InferenceRequest {
            inputs: text,
            parameters: params,
        })?;
        let request = build_request("POST", &url, Some(&body), token.as_deref())?;
        // Cold models answer 503 until loaded unless asked to wait.
        request
            .headers()
            .set("x-wait-for-model", "true")
            .map_err(js_err)?;

        let response = send(&request).await?;
        if !response.ok() {
            log::warn!("{} answered HTTP {}", self.model_id, response.status());
            return Err(BackendError::Http(response.status()));
        }
        read_json(&response).await
    }
}

fn js_err(e: JsValue) -> BackendError {
    BackendError::Request(format!("{e:?}"))
}

fn build_request(
    method: &str,
    url: &str,
    body: Option<&str>,
    token: Option<&str>,
) -> Result<Request, BackendError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let headers = request.headers();
    headers.set("accept", "application/json").map_err(js_err)?;
    if body.is_some() {
        headers
            .set("content-type", "application/json")
            .map_err(js_err)?;
    }
    if let Some(token) = token {
        headers
            .set("authorization", &format!("Bearer {token}"))
            .map_err(js_err)?;
    }
    Ok(request)
}

async fn send(request: &Request) -> Result<Response, BackendError> {
    let window = web_sys::window().ok_or_else(|| BackendError::Request("No window".into()))?;
    let resp_js = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| BackendError::Request(format!("Fetch failed: {e:?}")))?;
    resp_js
        .dyn_into::<Response>()
        .map_err(|_| BackendError::Request("Not a Response".into()))
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, BackendError> {
    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(|e| BackendError::MalformedResponse(format!("{e:?}")))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| BackendError::MalformedResponse(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BackendError> {
    let js = serde_wasm_bindgen::to_value(value).map_err(|e| BackendError::Request(e.to_string()))?;
    js_sys::JSON::stringify(&js)
        .map(String::from)
        .map_err(js_err)
}
