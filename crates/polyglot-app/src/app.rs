use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::language_reference::LanguageReference;
use crate::components::language_selector::LanguageSelector;
use crate::components::model_selector::ModelSelector;
use crate::components::settings::Settings;
use crate::components::translation::TranslationPanel;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let error_message = state.error_message;
    provide_context(state);

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <div class="flex-1 max-w-7xl mx-auto w-full px-4 sm:px-6 lg:px-8 py-8 grid grid-cols-1 lg:grid-cols-4 gap-8">
                <main class="lg:col-span-3 space-y-6">
                    // Error banner
                    {move || {
                        error_message.get().map(|msg| {
                            view! {
                                <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-xl p-4 flex items-center justify-between">
                                    <p class="text-red-800 dark:text-red-400 text-sm">{msg.clone()}</p>
                                    <button
                                        class="text-red-600 dark:text-red-400 hover:text-red-800 dark:hover:text-red-300 font-bold"
                                        on:click=move |_| error_message.set(None)
                                    >
                                        "\u{2715}"
                                    </button>
                                </div>
                            }
                        })
                    }}

                    <ModelSelector />
                    <LanguageSelector />
                    <TranslationPanel />
                    <Settings />
                </main>

                <LanguageReference />
            </div>

            <footer class="text-center py-4 text-xs text-gray-500 dark:text-gray-600">
                "Models are served by the Hugging Face Hub. Nothing is stored between visits."
            </footer>
        </div>
    }
}
