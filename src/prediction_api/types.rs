use serde::{Deserialize, Serialize};

/// Single-record request body for `POST /predict`.
///
/// Keys follow the service's column names, spaces included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: f64,
    pub sex: u8,
    #[serde(rename = "chest pain type")]
    pub chest_pain_type: u8,
    #[serde(rename = "resting bp s")]
    pub resting_bp_s: f64,
    pub cholesterol: f64,
    #[serde(rename = "fasting blood sugar")]
    pub fasting_blood_sugar: u8,
    #[serde(rename = "resting ecg")]
    pub resting_ecg: u8,
    #[serde(rename = "max heart rate")]
    pub max_heart_rate: f64,
    #[serde(rename = "exercise angina")]
    pub exercise_angina: u8,
    pub oldpeak: f64,
    #[serde(rename = "ST slope")]
    pub st_slope: u8,
}

/// Outcome of a single prediction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 1 when heart disease is predicted, 0 otherwise.
    pub prediction: u8,
    /// Probability of the positive class, in `[0, 1]`.
    pub probability: f64,
}

impl PredictionResult {
    pub fn is_high_risk(&self) -> bool {
        self.prediction == 1
    }
}

/// Co-indexed results for a batch upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchPredictionResult {
    pub names: Vec<String>,
    pub predictions: Vec<u8>,
    pub probabilities: Vec<f64>,
}

impl BatchPredictionResult {
    /// Number of rows that can be displayed without breaking co-indexing.
    pub fn row_count(&self) -> usize {
        self.names
            .len()
            .min(self.predictions.len())
            .min(self.probabilities.len())
    }

    /// Predictions outside the binary 0/1 classes.
    pub fn unexpected_prediction_count(&self) -> usize {
        self.predictions.iter().filter(|prediction| **prediction > 1).count()
    }

    pub fn is_consistent(&self) -> bool {
        self.names.len() == self.predictions.len()
            && self.predictions.len() == self.probabilities.len()
    }
}

/// Evaluation of a freshly retrained model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetrainingMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub roc_auc: f64,
    pub training_samples: u64,
    pub test_samples: u64,
}

/// Response body of `POST /retrain`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetrainingResponse {
    pub message: String,
    pub metrics: RetrainingMetrics,
}

/// A CSV file loaded into memory for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvUpload {
    /// File name reported in the multipart part.
    pub file_name: String,
    pub bytes: Vec<u8>,
}
