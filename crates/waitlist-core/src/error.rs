//! Waitlist error types.

use thiserror::Error;

/// Shown when a failure carries nothing more specific.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Client-side validation failure for a form field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace only.
    #[error("Email is required")]
    Required,

    /// Field does not look like an email address.
    #[error("Invalid email address")]
    Invalid,
}

/// Failure of a waitlist submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never produced a response (connection refused, DNS,
    /// dropped bridge call).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("Rejected with status {status}")]
    Rejected {
        status: u16,
        /// `message` field of the response body, if it carried one.
        message: Option<String>,
    },
}

impl SubmitError {
    /// Text to display under the form.
    ///
    /// A server-supplied message wins and is shown verbatim. A rejection
    /// without one gets a generic status line. Transport failures fall
    /// back to [`FALLBACK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            SubmitError::Rejected { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            SubmitError::Transport(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Invalid waitlist configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No base URL was supplied at build time.
    #[error("WAITLIST_BASE_URL is not set")]
    MissingBaseUrl,

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
