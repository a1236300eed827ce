//! TSX Optimizer - form state
//!
//! Plain data and transitions; no signals and no browser types, so every
//! rule of the form is checked by unit tests.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_optimize_code::{
    CodeSource, OptimizeCode, OptimizeOutcome, OptimizeRequest, OptimizeResponse, SelectedFile,
    TransportError,
};
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please upload a file or paste some code.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong.";
pub const FILE_READ_FAILURE_MESSAGE: &str = "Could not read the selected file.";

pub const SUBMIT_LABEL_IDLE: &str = "Optimize";
pub const SUBMIT_LABEL_PENDING: &str = "Optimizing...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
}

/// Why a submission did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("no file selected and no code pasted")]
    MissingInput,
    #[error("a submission is already pending")]
    AlreadyPending,
}

/// State of the optimizer form
///
/// Invariant: `code` is empty whenever `file` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizerForm {
    file: Option<SelectedFile>,
    code: String,
    system_prompt: String,
    user_prompt: String,
    state: SubmissionState,
    output: Option<String>,
    /// Bumped on every change of the file selection; stale reads compare against it
    file_selection: u64,
}

impl OptimizerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    // ------------------------------------------------------------------
    // Input capture
    // ------------------------------------------------------------------

    /// Select or clear the uploaded file. Selecting drops any pasted code.
    ///
    /// Any file read still in flight becomes stale.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file_selection += 1;
        if file.is_some() {
            self.code.clear();
        }
        self.file = file;
    }

    /// A file was picked and its read has started. Drops pasted code right
    /// away; returns the token the read must present when it finishes.
    pub fn begin_file_read(&mut self) -> u64 {
        self.file_selection += 1;
        self.code.clear();
        self.file_selection
    }

    /// Apply a finished read. Returns false if the selection changed since
    /// `begin_file_read` handed out `token`; the result is then ignored.
    pub fn finish_file_read(&mut self, token: u64, result: Result<SelectedFile, String>) -> bool {
        if token != self.file_selection {
            return false;
        }
        match result {
            Ok(file) => {
                self.code.clear();
                self.file = Some(file);
            }
            Err(e) => {
                log::error!("failed to read selected file: {e}");
                self.file_read_failed();
            }
        }
        true
    }

    /// Returns false (and changes nothing) while a file is selected.
    pub fn set_code(&mut self, code: String) -> bool {
        if self.file.is_some() {
            return false;
        }
        self.code = code;
        true
    }

    pub fn set_system_prompt(&mut self, prompt: String) {
        self.system_prompt = prompt;
    }

    pub fn set_user_prompt(&mut self, prompt: String) {
        self.user_prompt = prompt;
    }

    /// The browser could not read the picked file
    pub fn file_read_failed(&mut self) {
        self.file = None;
        self.output = Some(FILE_READ_FAILURE_MESSAGE.to_string());
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    pub fn code_input_disabled(&self) -> bool {
        self.file.is_some()
    }

    /// Whitespace-only code still enables the button; validation rejects it on submit.
    pub fn submit_disabled(&self) -> bool {
        self.is_pending() || (self.code.is_empty() && self.file.is_none())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            SUBMIT_LABEL_PENDING
        } else {
            SUBMIT_LABEL_IDLE
        }
    }

    /// Text of the output panel; `None` means the panel is not rendered
    pub fn output_panel(&self) -> Option<&str> {
        self.output.as_deref().filter(|text| !text.is_empty())
    }

    // ------------------------------------------------------------------
    // Submission pipeline
    // ------------------------------------------------------------------

    /// Validate and move to Pending, returning the payload to send.
    ///
    /// On `MissingInput` the validation message is shown and nothing is sent.
    /// On `AlreadyPending` the state is left untouched.
    pub fn begin_submission(&mut self) -> Result<OptimizeRequest, SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected::AlreadyPending);
        }

        let source = match &self.file {
            Some(file) => CodeSource::File(file.clone()),
            None if !self.code.trim().is_empty() => CodeSource::Code(self.code.clone()),
            None => {
                self.output = Some(VALIDATION_MESSAGE.to_string());
                return Err(SubmitRejected::MissingInput);
            }
        };

        self.output = None;
        self.state = SubmissionState::Pending;
        Ok(OptimizeRequest::new(
            source,
            &self.user_prompt,
            &self.system_prompt,
        ))
    }

    /// Apply the round-trip result and return to Idle.
    pub fn finish_submission(
        &mut self,
        result: Result<OptimizeResponse, TransportError>,
    ) -> OptimizeOutcome {
        let outcome = OptimizeOutcome::from_result(result);
        match &outcome {
            OptimizeOutcome::Optimized(text) => {
                self.output = Some(text.clone());
                self.reset_inputs();
            }
            OptimizeOutcome::ServerError(text) => {
                self.output = Some(text.clone());
            }
            OptimizeOutcome::Empty => {}
            OptimizeOutcome::TransportFailed(e) => {
                log::error!("{}: request failed: {}", OptimizeCode::full_name(), e);
                self.output = Some(TRANSPORT_FAILURE_MESSAGE.to_string());
            }
        }
        self.state = SubmissionState::Idle;
        outcome
    }

    fn reset_inputs(&mut self) {
        self.file_selection += 1;
        self.file = None;
        self.code.clear();
        self.system_prompt.clear();
        self.user_prompt.clear();
    }
}
