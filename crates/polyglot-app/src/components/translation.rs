use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use polyglot_translator::TranslateError;

use crate::state::{AppState, TranslationStatus};
use crate::workers::bridge;

#[component]
pub fn TranslationPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let input_text = state.input_text;
    let translation_text = state.translation_text;
    let status = state.status;
    let error_message = state.error_message;

    let on_input = move |ev: ev::Event| {
        input_text.set(event_target_value(&ev));
    };

    let translate = move |_| {
        if status.get_untracked() == TranslationStatus::Translating {
            return;
        }
        let request = state.request();
        if request.text.trim().is_empty() {
            error_message.set(Some(TranslateError::EmptyInput.to_string()));
            return;
        }

        error_message.set(None);
        translation_text.set(String::new());
        status.set(TranslationStatus::Translating);
        spawn_local(async move {
            let result = bridge::request_translation(request).await;
            state.finish(result);
        });
    };

    let copy_text = move |_| {
        let text = translation_text.get_untracked();
        if text.is_empty() {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(&text);
        }
    };

    let translating = move || status.get() == TranslationStatus::Translating;

    view! {
        <div class="card space-y-3">
            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                "Enter the text to translate"
            </label>
            <textarea
                class="text-panel w-full"
                rows="6"
                placeholder="Type your text here..."
                prop:value=move || input_text.get()
                on:input=on_input
            ></textarea>

            <div class="flex items-center gap-3">
                <button
                    class="btn-primary text-sm"
                    on:click=translate
                    disabled=translating
                >
                    {move || if translating() { "Translating..." } else { "Translate" }}
                </button>
                <span class={move || status.get().badge_class()}>
                    {move || status.get().label()}
                </span>
            </div>

            {move || {
                match status.get() {
                    TranslationStatus::Done | TranslationStatus::Failed => {
                        view! {
                            <div class="space-y-1">
                                <div class="flex items-center justify-between">
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                                        "Translated Text"
                                    </label>
                                    <button
                                        class="btn-secondary text-xs"
                                        on:click=copy_text
                                        title="Copy to clipboard"
                                    >
                                        "Copy"
                                    </button>
                                </div>
                                <textarea
                                    class="text-panel w-full"
                                    rows="8"
                                    readonly=true
                                    prop:value=move || translation_text.get()
                                ></textarea>
                            </div>
                        }.into_any()
                    }
                    _ => view! { <div></div> }.into_any()
                }
            }}
        </div>
    }
}
