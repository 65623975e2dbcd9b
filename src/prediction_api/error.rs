use std::path::PathBuf;

use crate::form::FieldErrors;

/// Why a submission did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local validation rejected one or more fields; nothing was sent.
    #[error("Please correct the highlighted fields.")]
    ValidationFailed(FieldErrors),
    /// No response reached the client.
    #[error("Could not reach the prediction service: {0}")]
    Unreachable(String),
    /// Non-success status. The message is the service's detail when present.
    #[error("{message}")]
    ServerError { status: u16, message: String },
    /// Success status but the body did not have the expected shape.
    #[error("Unexpected response from the prediction service: {0}")]
    MalformedResponse(String),
    /// The selected upload could not be read from disk.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SubmitError {
    /// Whether the failure happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SubmitError::ValidationFailed(_) | SubmitError::ReadFile { .. }
        )
    }
}
