//! TSX Optimizer form (MVVM Standard)
//!
//! Structure:
//! - controller.rs: OptimizerForm, the form state and its transitions
//! - model.rs: browser transport (FormData, fetch) and file reading
//! - view_model.rs: OptimizeCodeVm with RwSignals, drives submissions
//! - view.rs: Main component OptimizeCodePage

mod controller;
mod model;
mod view;
mod view_model;

pub use controller::{
    OptimizerForm, SubmissionState, SubmitRejected, FILE_READ_FAILURE_MESSAGE,
    TRANSPORT_FAILURE_MESSAGE, VALIDATION_MESSAGE,
};
pub use view::OptimizeCodePage;
pub use view_model::OptimizeCodeVm;
