use leptos::ev;
use leptos::prelude::*;

use crate::workers::bridge;

#[component]
pub fn Settings() -> impl IntoView {
    let config = bridge::hub_config();

    let on_token_change = move |ev: ev::Event| {
        bridge::set_access_token(&event_target_value(&ev));
    };

    view! {
        <div class="card">
            <h2 class="text-lg font-semibold mb-3">"Settings"</h2>
            <div class="space-y-3 text-sm text-gray-600 dark:text-gray-400">
                <p>{format!("Model lookup: {}", config.api_base)}</p>
                <p>{format!("Inference: {}", config.inference_base)}</p>
                <label class="block">
                    <span class="block mb-1">"Hugging Face access token (optional, not stored)"</span>
                    <input
                        type="password"
                        class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm"
                        placeholder="hf_..."
                        on:change=on_token_change
                    />
                </label>
            </div>
        </div>
    }
}
