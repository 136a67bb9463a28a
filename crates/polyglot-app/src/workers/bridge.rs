use std::rc::Rc;

use polyglot_translator::{TranslateResult, TranslationRequest, Translator};

use crate::config::HubConfig;
use crate::workers::hub_client::HubBackend;

thread_local! {
    static TRANSLATOR: Rc<Translator<HubBackend>> =
        Rc::new(Translator::new(HubBackend::new(HubConfig::default())));
}

/// The page-wide translator. Its model cache lives as long as the page.
pub fn translator() -> Rc<Translator<HubBackend>> {
    TRANSLATOR.with(Rc::clone)
}

pub async fn request_translation(request: TranslationRequest) -> TranslateResult<String> {
    let translator = translator();
    translator.submit(&request).await
}

pub fn hub_config() -> HubConfig {
    TRANSLATOR.with(|t| t.cache().backend().config())
}

pub fn set_access_token(token: &str) {
    TRANSLATOR.with(|t| t.cache().backend().set_access_token(token));
    log::debug!("access token {}", if token.trim().is_empty() { "cleared" } else { "set" });
}
