use leptos::ev;
use leptos::prelude::*;

use polyglot_translator::ModelChoice;

use crate::state::AppState;

#[component]
pub fn ModelSelector() -> impl IntoView {
    let state = expect_context::<AppState>();
    let model_choice = state.model_choice;

    let on_change = move |ev: ev::Event| {
        model_choice.set(event_target_value(&ev));
    };

    view! {
        <div class="card">
            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                "Choose Translation Model"
            </label>
            <select
                class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                on:change=on_change
            >
                {ModelChoice::ALL.iter().map(|choice| {
                    let label = choice.label();
                    view! {
                        <option value=label selected=move || model_choice.get() == label>
                            {label}
                        </option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
