//! Client for the hosted heart-disease prediction service.

mod error;
mod multipart;
mod types;

pub mod api;

pub use error::SubmitError;
pub use types::{
    BatchPredictionResult, CsvUpload, PredictionRequest, PredictionResult, RetrainingMetrics,
    RetrainingResponse,
};

use crate::settings::{ApiConfig, Endpoint};

/// Remote operations the submission flow depends on.
///
/// Implemented over HTTP in production and by in-memory fakes in tests.
pub trait PredictionService: Send + Sync {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, SubmitError>;
    fn predict_batch(&self, upload: &CsvUpload) -> Result<BatchPredictionResult, SubmitError>;
    fn retrain(&self, upload: &CsvUpload) -> Result<RetrainingResponse, SubmitError>;
}

/// [`PredictionService`] backed by blocking HTTP calls.
#[derive(Clone, Debug)]
pub struct HttpPredictionService {
    config: ApiConfig,
}

impl HttpPredictionService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, SubmitError> {
        api::post_prediction(self.config.endpoint_url(Endpoint::Predict), request)
    }

    fn predict_batch(&self, upload: &CsvUpload) -> Result<BatchPredictionResult, SubmitError> {
        api::post_batch(self.config.endpoint_url(Endpoint::PredictBatch), upload)
    }

    fn retrain(&self, upload: &CsvUpload) -> Result<RetrainingResponse, SubmitError> {
        api::post_retraining(self.config.endpoint_url(Endpoint::Retrain), upload)
    }
}
