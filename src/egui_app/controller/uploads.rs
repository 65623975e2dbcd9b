use super::*;
use crate::prediction_api::{BatchPredictionResult, RetrainingResponse, SubmitError};
use rfd::FileDialog;
use crate::egui_app::state::Route;
use std::path::{Path, PathBuf};

pub(crate) const MISSING_FILE_MESSAGE: &str = "Please select a file to upload";
pub(crate) const BATCH_SUCCESS_MESSAGE: &str = "File processed successfully!";
pub(crate) const DROP_TARGET_MESSAGE: &str = "Open Batch Upload or Retrain Model to drop a CSV file";
pub(crate) const NOT_CSV_MESSAGE: &str = "Only .csv files can be uploaded";

impl EguiController {
    /// Open a native dialog to choose the batch prediction CSV.
    pub fn pick_batch_file(&mut self) {
        if let Some(path) = pick_csv_file() {
            self.select_batch_file(path);
        }
    }

    /// Open a native dialog to choose the retraining CSV.
    pub fn pick_retraining_file(&mut self) {
        if let Some(path) = pick_csv_file() {
            self.select_retraining_file(path);
        }
    }

    pub fn select_batch_file(&mut self, path: PathBuf) {
        if self.ui.batch.submitting {
            return;
        }
        self.ui.batch.selected_file = Some(path);
        self.ui.batch.clear_feedback();
    }

    pub fn select_retraining_file(&mut self, path: PathBuf) {
        if self.ui.retraining.submitting {
            return;
        }
        self.ui.retraining.selected_file = Some(path);
        self.ui.retraining.clear_feedback();
    }

    /// Route a file dropped on the window to the upload page currently shown.
    pub fn drop_csv_file(&mut self, path: PathBuf) {
        if !is_csv(&path) {
            self.set_status(NOT_CSV_MESSAGE, StatusTone::Warning);
            return;
        }
        match self.current_route() {
            Route::BatchUpload => self.select_batch_file(path),
            Route::Retraining => self.select_retraining_file(path),
            Route::Home | Route::Prediction => {
                self.set_status(DROP_TARGET_MESSAGE, StatusTone::Warning);
            }
        }
    }

    pub fn submit_batch(&mut self) {
        let state = &mut self.ui.batch;
        if state.submitting {
            return;
        }
        let Some(path) = state.selected_file.clone() else {
            state.last_error = Some(MISSING_FILE_MESSAGE.to_string());
            return;
        };
        state.clear_feedback();
        state.submitting = true;
        self.set_status(
            format!("Uploading {} for batch prediction...", path.display()),
            StatusTone::Busy,
        );
        self.jobs.begin_batch(self.orchestrator.clone(), path);
    }

    pub fn submit_retraining(&mut self) {
        let state = &mut self.ui.retraining;
        if state.submitting {
            return;
        }
        let Some(path) = state.selected_file.clone() else {
            state.last_error = Some(MISSING_FILE_MESSAGE.to_string());
            return;
        };
        state.clear_feedback();
        state.submitting = true;
        self.set_status(
            format!("Retraining model with {}...", path.display()),
            StatusTone::Busy,
        );
        self.jobs.begin_retraining(self.orchestrator.clone(), path);
    }

    pub(super) fn finish_batch(&mut self, result: Result<BatchPredictionResult, SubmitError>) {
        let state = &mut self.ui.batch;
        state.submitting = false;
        match result {
            Ok(result) => {
                let rows = result.row_count();
                state.last_success = Some(BATCH_SUCCESS_MESSAGE.to_string());
                state.result = Some(result);
                self.set_status(format!("Batch prediction returned {rows} rows"), StatusTone::Info);
            }
            Err(err) => {
                let message = err.to_string();
                state.last_error = Some(message.clone());
                self.set_status(format!("Batch upload failed: {message}"), StatusTone::Error);
            }
        }
    }

    pub(super) fn finish_retraining(&mut self, result: Result<RetrainingResponse, SubmitError>) {
        let state = &mut self.ui.retraining;
        state.submitting = false;
        match result {
            Ok(response) => {
                state.last_success = Some(response.message.clone());
                state.result = Some(response);
                self.set_status("Model retrained", StatusTone::Info);
            }
            Err(err) => {
                let message = err.to_string();
                state.last_error = Some(message.clone());
                self.set_status(format!("Retraining failed: {message}"), StatusTone::Error);
            }
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn pick_csv_file() -> Option<PathBuf> {
    FileDialog::new().add_filter("CSV", &["csv"]).pick_file()
}
