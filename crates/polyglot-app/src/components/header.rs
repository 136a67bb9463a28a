use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let toggle_dark = move |_| {
        let html = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(html) = html {
            let _ = html.class_list().toggle("dark");
        }
    };

    view! {
        <header class="border-b border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                        "Multi-Model Translation Tool"
                    </h1>
                    <p class="text-xs text-gray-500 dark:text-gray-400">
                        "Translate text using different free models and choose between them."
                    </p>
                </div>

                <div class="flex items-center gap-3">
                    <button
                        class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=toggle_dark
                        title="Toggle dark mode"
                    >
                        <span class="text-sm">{"\u{263E}"}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
