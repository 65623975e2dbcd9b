use std::path::PathBuf;

use crate::form::{FieldErrors, PredictionForm};
use crate::prediction_api::PredictionResult;

/// Single-prediction page state.
#[derive(Clone, Debug, Default)]
pub struct PredictionFormState {
    /// Raw text for each input, exactly as typed or selected.
    pub form: PredictionForm,
    pub errors: FieldErrors,
    /// True while a prediction job is in flight.
    pub submitting: bool,
    pub last_result: Option<PredictionResult>,
    /// Top-level message shown under the form.
    pub last_error: Option<String>,
}

/// State shared by the CSV upload pages.
#[derive(Clone, Debug)]
pub struct UploadFormState<T> {
    pub selected_file: Option<PathBuf>,
    pub submitting: bool,
    pub last_error: Option<String>,
    pub last_success: Option<String>,
    pub result: Option<T>,
}

impl<T> Default for UploadFormState<T> {
    fn default() -> Self {
        Self {
            selected_file: None,
            submitting: false,
            last_error: None,
            last_success: None,
            result: None,
        }
    }
}

impl<T> UploadFormState<T> {
    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.selected_file.is_some()
    }

    /// Forget previous feedback, e.g. after a new file is chosen.
    pub fn clear_feedback(&mut self) {
        self.last_error = None;
        self.last_success = None;
        self.result = None;
    }
}
