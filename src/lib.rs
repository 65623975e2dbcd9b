//! Library exports for the binary and integration tests.
/// App data directory resolution.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Raw form values and request building.
pub mod form;
/// Shared HTTP agent helpers.
pub(crate) mod http_client;
/// Tracing setup.
pub mod logging;
/// Submission sequencing.
pub mod orchestrator;
/// Prediction service client.
pub mod prediction_api;
/// Persisted settings and endpoint resolution.
pub mod settings;
/// Field validation table.
pub mod validation;
