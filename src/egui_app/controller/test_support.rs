use super::*;
use crate::prediction_api::{
    BatchPredictionResult, CsvUpload, PredictionRequest, PredictionResult, PredictionService,
    RetrainingMetrics, RetrainingResponse, SubmitError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Canned service that counts calls and replays configured outcomes.
pub(super) struct FakeService {
    pub(super) predict_calls: AtomicUsize,
    pub(super) upload_calls: AtomicUsize,
    pub(super) predict_error: Mutex<Option<SubmitError>>,
}

impl FakeService {
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            predict_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            predict_error: Mutex::new(None),
        })
    }

    pub(super) fn fail_predictions_with(&self, err: SubmitError) {
        *self.predict_error.lock().unwrap() = Some(err);
    }

    pub(super) fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub(super) fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }
}

impl PredictionService for FakeService {
    fn predict(&self, _request: &PredictionRequest) -> Result<PredictionResult, SubmitError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.predict_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(PredictionResult {
            prediction: 1,
            probability: 0.87,
        })
    }

    fn predict_batch(&self, _upload: &CsvUpload) -> Result<BatchPredictionResult, SubmitError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        Ok(BatchPredictionResult {
            names: vec!["A".into(), "B".into()],
            predictions: vec![0, 1],
            probabilities: vec![0.2, 0.9],
        })
    }

    fn retrain(&self, _upload: &CsvUpload) -> Result<RetrainingResponse, SubmitError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        Ok(RetrainingResponse {
            message: "Model retrained successfully".into(),
            metrics: RetrainingMetrics {
                accuracy: 0.9,
                precision: 0.88,
                recall: 0.91,
                f1_score: 0.895,
                roc_auc: 0.95,
                training_samples: 800,
                test_samples: 200,
            },
        })
    }
}

pub(super) fn controller_with(service: Arc<FakeService>) -> EguiController {
    EguiController::new(SubmissionOrchestrator::new(service))
}

/// Poll until every background job has reported back.
pub(super) fn wait_for_jobs(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while controller.has_jobs_in_flight() {
        assert!(Instant::now() < deadline, "background job did not finish");
        std::thread::sleep(Duration::from_millis(5));
        controller.tick();
    }
}

pub(super) fn fill_valid_form(controller: &mut EguiController) {
    let form = crate::form::valid_form();
    for field in crate::validation::Field::ALL {
        controller.on_field_change(field, form.value(field));
    }
}
