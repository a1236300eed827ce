//! TSX Optimizer - View Model

use super::controller::OptimizerForm;
use super::model::{post_optimize, read_file};
use crate::shared::api_utils::endpoint_url;
use crate::shared::config::OptimizerConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_optimize_code::{
    OptimizeCode, OptimizeOutcome, OptimizeResponse, SelectedFile, TransportError,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::AbortController;

#[derive(Clone, Copy)]
pub struct OptimizeCodeVm {
    pub form: RwSignal<OptimizerForm>,
    pub file_input: NodeRef<leptos::html::Input>,
    config: StoredValue<OptimizerConfig>,
    in_flight: StoredValue<Option<AbortController>, LocalStorage>,
}

impl OptimizeCodeVm {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            form: RwSignal::new(OptimizerForm::new()),
            file_input: NodeRef::new(),
            config: StoredValue::new(config),
            in_flight: StoredValue::new_local(None),
        }
    }

    pub fn set_code(&self, code: String) {
        self.form.update(|f| {
            f.set_code(code);
        });
    }

    pub fn set_system_prompt(&self, prompt: String) {
        self.form.update(|f| f.set_system_prompt(prompt));
    }

    pub fn set_user_prompt(&self, prompt: String) {
        self.form.update(|f| f.set_user_prompt(prompt));
    }

    /// Handle a change of the file picker. Reading the file is async;
    /// pasted code is dropped right away, and a read overtaken by a newer
    /// selection is discarded.
    pub fn select_file(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            self.form.update(|f| f.select_file(None));
            return;
        };

        let Some(token) = self.form.try_update(|f| f.begin_file_read()) else {
            return;
        };

        let form = self.form;
        let file_input = self.file_input;
        wasm_bindgen_futures::spawn_local(async move {
            let result = read_file(file).await;
            if let Ok(selected) = &result {
                log::debug!(
                    "read {} ({} bytes)",
                    selected.name,
                    selected.content.len()
                );
            }
            let failed = result.is_err();
            match apply_file_read(form, token, result) {
                Some(true) if failed => clear_file_input(file_input),
                Some(true) => {}
                Some(false) => log::debug!("file read superseded by a newer selection"),
                None => log::debug!("optimizer view disposed, file read dropped"),
            }
        });
    }

    /// Submit the form. Does nothing while a request is pending.
    pub fn submit(&self) {
        let request = match self.form.try_update(|f| f.begin_submission()) {
            Some(Ok(request)) => request,
            Some(Err(reason)) => {
                log::debug!("{}: not submitted: {reason}", OptimizeCode::full_name());
                return;
            }
            None => return,
        };

        let endpoint = self.config.with_value(|c| c.endpoint.clone());
        let url = endpoint_url(&endpoint.url);

        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable: {e:?}");
                None
            }
        };
        let signal = controller.as_ref().map(|c| c.signal());
        let timeout = endpoint.timeout_ms().and_then(|ms| {
            let controller = controller.clone()?;
            Some(Timeout::new(ms, move || {
                log::warn!("optimize request timed out after {ms} ms");
                controller.abort();
            }))
        });
        self.in_flight.set_value(controller);

        log::info!("{}: POST {url}", OptimizeCode::full_name());

        let form = self.form;
        let in_flight = self.in_flight;
        let file_input = self.file_input;
        wasm_bindgen_futures::spawn_local(async move {
            let result = post_optimize(&url, &request, signal.as_ref()).await;
            // Dropping the timer cancels it
            drop(timeout);
            in_flight.try_update_value(|c| *c = None);

            match apply_result(form, result) {
                Some(outcome) => {
                    log::info!("{}: {}", OptimizeCode::full_name(), outcome.kind());
                    if outcome.is_success() {
                        clear_file_input(file_input);
                    }
                }
                None => log::debug!("optimizer view disposed, response dropped"),
            }
        });
    }

    /// Abort the in-flight request, if any. Called when the view is torn down.
    pub fn abort_pending(&self) {
        self.in_flight.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    }
}

/// Apply a finished request to the form.
///
/// `None` when the view (and with it the form signal) is already disposed;
/// the result is then dropped.
pub fn apply_result(
    form: RwSignal<OptimizerForm>,
    result: Result<OptimizeResponse, TransportError>,
) -> Option<OptimizeOutcome> {
    form.try_update(|f| f.finish_submission(result))
}

/// Apply a finished file read. `Some(false)` when the read was superseded,
/// `None` when the view is disposed.
pub fn apply_file_read(
    form: RwSignal<OptimizerForm>,
    token: u64,
    result: Result<SelectedFile, String>,
) -> Option<bool> {
    form.try_update(|f| f.finish_file_read(token, result))
}

/// The picker keeps its own DOM value; reset it when the form drops the file
fn clear_file_input(file_input: NodeRef<leptos::html::Input>) {
    if let Some(input) = file_input.get_untracked() {
        input.set_value("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_form() -> RwSignal<OptimizerForm> {
        let mut form = OptimizerForm::new();
        form.set_code("code".into());
        form.set_user_prompt("user".into());
        form.begin_submission().unwrap();
        RwSignal::new(form)
    }

    #[test]
    fn test_result_applied_while_view_alive() {
        let owner = Owner::new();
        owner.with(|| {
            let form = pending_form();
            let outcome = apply_result(form, Ok(OptimizeResponse::optimized("X")));
            assert_eq!(outcome, Some(OptimizeOutcome::Optimized("X".into())));
            form.with_untracked(|f| {
                assert_eq!(f.output_panel(), Some("X"));
                assert_eq!(f.code(), "");
                assert!(!f.is_pending());
            });
        });
    }

    #[test]
    fn test_result_dropped_after_view_disposed() {
        let owner = Owner::new();
        let form = owner.with(pending_form);
        owner.cleanup();

        assert!(form.is_disposed());
        assert_eq!(apply_result(form, Ok(OptimizeResponse::optimized("late"))), None);
        assert_eq!(apply_result(form, Err(TransportError::Aborted)), None);
        assert_eq!(form.try_get_untracked(), None);
    }

    #[test]
    fn test_file_read_dropped_after_view_disposed() {
        let owner = Owner::new();
        let (form, token) = owner.with(|| {
            let form = RwSignal::new(OptimizerForm::new());
            let token = form.try_update(|f| f.begin_file_read()).unwrap();
            (form, token)
        });
        owner.cleanup();

        let file = SelectedFile::new("A.tsx", "", b"const a = 1;".to_vec());
        assert_eq!(apply_file_read(form, token, Ok(file)), None);
    }

    #[test]
    fn test_superseded_file_read_reported() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(OptimizerForm::new());
            let token = form.try_update(|f| f.begin_file_read()).unwrap();
            form.update(|f| f.select_file(None));

            let file = SelectedFile::new("A.tsx", "", b"const a = 1;".to_vec());
            assert_eq!(apply_file_read(form, token, Ok(file)), Some(false));
            form.with_untracked(|f| {
                assert_eq!(f.file(), None);
                assert!(!f.code_input_disabled());
            });
        });
    }
}
