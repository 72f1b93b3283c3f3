//! Client error types.

use thiserror::Error;
use waitlist_core::SubmitError;

/// Errors that can occur while talking to the waitlist service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Outbound HTTP is only available inside the Spin runtime.
    #[error("Outbound HTTP is not available on this target")]
    Unsupported,
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::JsonError(e.to_string())
    }
}

impl From<ClientError> for SubmitError {
    fn from(e: ClientError) -> Self {
        SubmitError::Transport(e.to_string())
    }
}
