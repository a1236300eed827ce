//! TSX Optimizer - View Component

use super::view_model::OptimizeCodeVm;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::config::OptimizerConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_optimize_code::OptimizeCode;
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, Spinner, SpinnerSize};
use wasm_bindgen::JsCast;

fn file_from_event(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.files()?.get(0)
}

#[component]
#[allow(non_snake_case)]
pub fn OptimizeCodePage() -> impl IntoView {
    let config = use_context::<OptimizerConfig>().unwrap_or_default();
    let vm = OptimizeCodeVm::new(config);

    on_cleanup(move || vm.abort_pending());

    let system_prompt = Signal::derive(move || vm.form.with(|f| f.system_prompt().to_string()));
    let user_prompt = Signal::derive(move || vm.form.with(|f| f.user_prompt().to_string()));
    let code = Signal::derive(move || vm.form.with(|f| f.code().to_string()));
    let code_disabled = Signal::derive(move || vm.form.with(|f| f.code_input_disabled()));
    let submit_disabled = Signal::derive(move || vm.form.with(|f| f.submit_disabled()));
    let is_pending = move || vm.form.with(|f| f.is_pending());

    view! {
        <div class="optimizer">
            <h1 class="optimizer__title">"⚡ " {OptimizeCode::display_name()}</h1>

            <form
                class="optimizer__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div class="form__group">
                    <label class="form__label" for="optimizer-file">"Upload .tsx File"</label>
                    <input
                        id="optimizer-file"
                        class="form__file"
                        type="file"
                        accept=".tsx"
                        node_ref=vm.file_input
                        on:change=move |ev| vm.select_file(file_from_event(&ev))
                    />
                </div>

                <Input
                    id="optimizer-system-prompt"
                    label="System Prompt"
                    placeholder="Enter system prompt..."
                    value=system_prompt
                    on_input=Callback::new(move |v: String| vm.set_system_prompt(v))
                />

                <Input
                    id="optimizer-user-prompt"
                    label="User Prompt"
                    placeholder="Enter user prompt..."
                    value=user_prompt
                    on_input=Callback::new(move |v: String| vm.set_user_prompt(v))
                />

                <Textarea
                    id="optimizer-code"
                    label="Or Paste Code"
                    placeholder="Paste TypeScript/TSX code here..."
                    class="optimizer__code"
                    rows=12
                    value=code
                    disabled=code_disabled
                    on_input=Callback::new(move |v: String| vm.set_code(v))
                />

                <Flex align=FlexAlign::Center>
                    <Button button_type="submit" disabled=submit_disabled>
                        {move || is_pending().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                        {move || vm.form.with(|f| f.submit_label())}
                    </Button>
                </Flex>
            </form>

            // Output panel: only when there is text to show
            {move || {
                vm.form
                    .with(|f| f.output_panel().map(str::to_string))
                    .map(|text| {
                        view! {
                            <div class="optimizer__output">
                                <h2 class="optimizer__output-title">"Optimized Code:"</h2>
                                <pre class="optimizer__output-body">{text}</pre>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
