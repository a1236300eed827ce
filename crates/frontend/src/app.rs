use crate::shared::config::load_config;
use crate::usecases::u601_optimize_code::OptimizeCodePage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the optimizer configuration to the whole app via context.
    let config = load_config().unwrap_or_else(|e| {
        log::error!("{e}; using built-in defaults");
        Default::default()
    });
    provide_context(config);

    view! {
        <ConfigProvider>
            <main class="app">
                <OptimizeCodePage />
            </main>
        </ConfigProvider>
    }
}
