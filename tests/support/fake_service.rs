use std::sync::Mutex;

use pulsepoint::prediction_api::{
    BatchPredictionResult, CsvUpload, PredictionRequest, PredictionResult, PredictionService,
    RetrainingMetrics, RetrainingResponse, SubmitError,
};

/// Records every request and answers with fixed results.
#[derive(Default)]
pub struct RecordingService {
    pub predictions: Mutex<Vec<PredictionRequest>>,
    pub uploads: Mutex<Vec<CsvUpload>>,
}

impl RecordingService {
    pub fn prediction_count(&self) -> usize {
        self.predictions.lock().unwrap().len()
    }

    pub fn upload_names(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|upload| upload.file_name.clone())
            .collect()
    }
}

impl PredictionService for RecordingService {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, SubmitError> {
        self.predictions.lock().unwrap().push(request.clone());
        Ok(PredictionResult {
            prediction: 0,
            probability: 0.12,
        })
    }

    fn predict_batch(&self, upload: &CsvUpload) -> Result<BatchPredictionResult, SubmitError> {
        self.uploads.lock().unwrap().push(upload.clone());
        Ok(BatchPredictionResult {
            names: vec!["A".into(), "B".into(), "C".into()],
            predictions: vec![0, 1],
            probabilities: vec![0.2, 0.9, 0.4],
        })
    }

    fn retrain(&self, upload: &CsvUpload) -> Result<RetrainingResponse, SubmitError> {
        self.uploads.lock().unwrap().push(upload.clone());
        Ok(RetrainingResponse {
            message: "Model retrained successfully".into(),
            metrics: RetrainingMetrics {
                accuracy: 0.86,
                precision: 0.84,
                recall: 0.9,
                f1_score: 0.87,
                roc_auc: 0.93,
                training_samples: 952,
                test_samples: 238,
            },
        })
    }
}
