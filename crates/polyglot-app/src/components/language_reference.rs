use leptos::prelude::*;

use polyglot_translator::languages;

#[component]
pub fn LanguageReference() -> impl IntoView {
    view! {
        <aside class="card space-y-3">
            <h2 class="text-lg font-semibold">"Supported Languages"</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                "This tool supports translations for the following languages:"
            </p>
            <ul class="text-sm space-y-1">
                {languages::list_languages().iter().map(|lang| {
                    view! {
                        <li>
                            <span class="font-mono text-gray-500">{lang.code}</span>
                            {format!(": {}", lang.name)}
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
