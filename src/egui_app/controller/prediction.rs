use super::*;
use crate::form;
use crate::prediction_api::{PredictionResult, SubmitError};
use crate::validation::Field;

pub(crate) const FIX_FIELDS_MESSAGE: &str = "Please correct the highlighted fields.";

impl EguiController {
    /// Store new raw text for `field` and drop its stale error.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        let state = &mut self.ui.prediction;
        state.form.set(field, value);
        state.errors.clear_field(field);
    }

    /// Validate locally and, when every field passes, request a prediction.
    pub fn submit_prediction(&mut self) {
        if self.ui.prediction.submitting {
            return;
        }
        let errors = form::validate_form(&self.ui.prediction.form);
        if !errors.is_empty() {
            let count = errors.len();
            let state = &mut self.ui.prediction;
            state.errors = errors;
            state.last_result = None;
            state.last_error = Some(FIX_FIELDS_MESSAGE.to_string());
            self.set_status(
                format!("{count} field(s) need attention"),
                StatusTone::Warning,
            );
            return;
        }
        let state = &mut self.ui.prediction;
        state.errors.clear();
        state.last_result = None;
        state.last_error = None;
        state.submitting = true;
        let form = state.form.clone();
        self.jobs.begin_prediction(self.orchestrator.clone(), form);
        self.set_status("Requesting prediction...", StatusTone::Busy);
    }

    /// Empty every input and forget the last outcome.
    pub fn reset_prediction_form(&mut self) {
        if self.ui.prediction.submitting {
            return;
        }
        self.ui.prediction = PredictionFormState::default();
    }

    pub(super) fn finish_prediction(&mut self, result: Result<PredictionResult, SubmitError>) {
        let state = &mut self.ui.prediction;
        state.submitting = false;
        match result {
            Ok(result) => {
                state.last_result = Some(result);
                let label = if result.is_high_risk() {
                    "high risk"
                } else {
                    "low risk"
                };
                self.set_status(format!("Prediction complete: {label}"), StatusTone::Info);
            }
            Err(SubmitError::ValidationFailed(errors)) => {
                state.errors = errors;
                state.last_error = Some(FIX_FIELDS_MESSAGE.to_string());
                self.set_status(FIX_FIELDS_MESSAGE, StatusTone::Warning);
            }
            Err(err) => {
                let message = err.to_string();
                state.last_error = Some(message.clone());
                self.set_status(format!("Prediction failed: {message}"), StatusTone::Error);
            }
        }
    }
}
