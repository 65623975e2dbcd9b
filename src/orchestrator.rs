//! Sequences validation, the service call and error mapping for one user action.

use std::path::Path;
use std::sync::Arc;

use crate::form::{self, PredictionForm};
use crate::prediction_api::{
    BatchPredictionResult, CsvUpload, PredictionResult, PredictionService, RetrainingResponse,
    SubmitError,
};

/// Entry point used by the UI for every submission.
#[derive(Clone)]
pub struct SubmissionOrchestrator {
    service: Arc<dyn PredictionService>,
}

impl SubmissionOrchestrator {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self { service }
    }

    /// Validate `form` and, only if every field passes, request one prediction.
    pub fn submit(&self, form: &PredictionForm) -> Result<PredictionResult, SubmitError> {
        let request = form::build_request(form).map_err(|errors| {
            tracing::info!("Prediction blocked by {} invalid field(s)", errors.len());
            SubmitError::ValidationFailed(errors)
        })?;
        tracing::info!("Submitting prediction request");
        let result = self.service.predict(&request).inspect_err(log_failure)?;
        tracing::info!(
            "Prediction received: class {} at {:.4}",
            result.prediction,
            result.probability
        );
        Ok(result)
    }

    /// Upload a CSV for batch prediction.
    pub fn submit_batch(&self, path: &Path) -> Result<BatchPredictionResult, SubmitError> {
        let upload = read_upload(path).inspect_err(log_failure)?;
        tracing::info!("Submitting batch file {}", path.display());
        let result = self
            .service
            .predict_batch(&upload)
            .inspect_err(log_failure)?;
        if !result.is_consistent() {
            tracing::warn!(
                "Batch result lengths differ (names {}, predictions {}, probabilities {}); showing {} rows",
                result.names.len(),
                result.predictions.len(),
                result.probabilities.len(),
                result.row_count()
            );
        }
        let unexpected = result.unexpected_prediction_count();
        if unexpected > 0 {
            tracing::warn!("Batch result has {unexpected} prediction(s) outside 0/1; shown as unknown");
        }
        tracing::info!("Batch prediction returned {} rows", result.row_count());
        Ok(result)
    }

    /// Upload a labelled CSV to retrain the model.
    pub fn submit_retraining(&self, path: &Path) -> Result<RetrainingResponse, SubmitError> {
        let upload = read_upload(path).inspect_err(log_failure)?;
        tracing::info!("Submitting retraining file {}", path.display());
        let response = self.service.retrain(&upload).inspect_err(log_failure)?;
        tracing::info!(
            "Retraining finished: accuracy {:.4} on {} test samples",
            response.metrics.accuracy,
            response.metrics.test_samples
        );
        Ok(response)
    }
}

/// Load a file from disk for upload.
pub fn read_upload(path: &Path) -> Result<CsvUpload, SubmitError> {
    let bytes = std::fs::read(path).map_err(|source| SubmitError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.csv".to_string());
    Ok(CsvUpload { file_name, bytes })
}

fn log_failure(err: &SubmitError) {
    if err.is_local() {
        tracing::info!("Submission stopped before sending: {err}");
    } else {
        tracing::warn!("Submission failed: {err}");
    }
}
