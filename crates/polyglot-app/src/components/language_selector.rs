use leptos::ev;
use leptos::prelude::*;

use polyglot_translator::languages;

use crate::state::AppState;

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let state = expect_context::<AppState>();
    let source_language = state.source_language;
    let target_language = state.target_language;

    let on_source_change = move |ev: ev::Event| {
        state.set_source(event_target_value(&ev));
    };

    let on_target_change = move |ev: ev::Event| {
        target_language.set(event_target_value(&ev));
    };

    view! {
        <div class="card">
            <div class="flex flex-col sm:flex-row items-center gap-4">
                <div class="flex-1 w-full">
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Select Source Language"
                    </label>
                    <select
                        class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                        on:change=on_source_change
                    >
                        {languages::list_languages().iter().map(|lang| {
                            let code = lang.code;
                            view! {
                                <option value=code selected=move || source_language.get() == code>
                                    {lang.name}
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="hidden sm:flex items-center pt-6">
                    <span class="text-gray-400 text-xl">"\u{2192}"</span>
                </div>

                <div class="flex-1 w-full">
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Select Target Language"
                    </label>
                    <select
                        class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                        on:change=on_target_change
                    >
                        // Rebuilt whenever the source changes so it is never offered as a target.
                        {move || {
                            let source = source_language.get();
                            languages::target_languages(&source).map(|lang| {
                                let code = lang.code;
                                view! {
                                    <option value=code selected=move || target_language.get() == code>
                                        {lang.name}
                                    </option>
                                }
                            }).collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </div>
        </div>
    }
}
