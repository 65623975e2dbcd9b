//! Shared state types for the egui UI.

mod forms;
mod status;

pub use forms::*;
pub use status::*;

use crate::prediction_api::{BatchPredictionResult, RetrainingResponse};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub route: Route,
    pub status: StatusBarState,
    pub prediction: PredictionFormState,
    pub batch: UploadFormState<BatchPredictionResult>,
    pub retraining: UploadFormState<RetrainingResponse>,
}

/// Pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Prediction,
    BatchUpload,
    Retraining,
}

impl Route {
    /// Routes shown as navigation links, in display order.
    pub const NAV_LINKS: [Route; 3] = [Route::Prediction, Route::BatchUpload, Route::Retraining];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Prediction => "Prediction",
            Route::BatchUpload => "Batch Upload",
            Route::Retraining => "Retrain Model",
        }
    }

    /// Path of the page as addressed in the hosted web client.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Prediction => "/prediction",
            Route::BatchUpload => "/data-upload",
            Route::Retraining => "/retraining",
        }
    }
}
