//! Server functions and the browser-side bridge to them.

use async_trait::async_trait;
use leptos::server_fn::error::ServerFnError;
use serde::{Deserialize, Serialize};
use waitlist_core::{validate_email, SubmitError, WaitlistApi};

/// Status answered for addresses that fail validation on the server.
pub const UNPROCESSABLE: u16 = 422;

/// Result of a signup as seen by the browser.
///
/// Rejections travel as data so the service's message reaches the page
/// unchanged; only transport failures use the error channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinOutcome {
    Joined,
    Rejected { status: u16, message: Option<String> },
}

impl JoinOutcome {
    /// Fold the server function result back into the workflow's terms.
    pub fn into_result(result: Result<JoinOutcome, ServerFnError>) -> Result<(), SubmitError> {
        match result {
            Ok(JoinOutcome::Joined) => Ok(()),
            Ok(JoinOutcome::Rejected { status, message }) => {
                Err(SubmitError::Rejected { status, message })
            }
            Err(e) => Err(SubmitError::Transport(e.to_string())),
        }
    }
}

/// Answer for an email the page should never have sent, or `None` when it
/// may be forwarded upstream.
pub fn precheck(email: &str) -> Option<JoinOutcome> {
    let error = validate_email(email).err()?;
    tracing::debug!(error = %error, "rejecting invalid email before calling out");
    Some(JoinOutcome::Rejected {
        status: UNPROCESSABLE,
        message: Some(error.to_string()),
    })
}

/// Add an email to the waitlist.
#[leptos::server(prefix = "/api")]
pub async fn join_waitlist(email: String) -> Result<JoinOutcome, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use waitlist_client::WaitlistClient;
        use waitlist_core::{email_domain, WaitlistConfig};

        if let Some(rejected) = precheck(&email) {
            return Ok(rejected);
        }

        let config = WaitlistConfig::from_build_env()
            .map_err(|e| ServerFnError::new(format!("Configuration error: {}", e)))?;
        let client = WaitlistClient::new(config);

        tracing::info!(domain = email_domain(&email), "forwarding waitlist signup");
        match client.join(&email).await {
            Ok(()) => Ok(JoinOutcome::Joined),
            Err(SubmitError::Rejected { status, message }) => {
                Ok(JoinOutcome::Rejected { status, message })
            }
            Err(SubmitError::Transport(e)) => Err(ServerFnError::new(e)),
        }
    }

    #[cfg(not(feature = "ssr"))]
    {
        let _ = email;
        Err(ServerFnError::new("Server-only function"))
    }
}

/// [`WaitlistApi`] implementation used by the page: one call to
/// [`join_waitlist`] per attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnApi;

#[async_trait(?Send)]
impl WaitlistApi for ServerFnApi {
    async fn join(&self, email: &str) -> Result<(), SubmitError> {
        JoinOutcome::into_result(join_waitlist(email.to_string()).await)
    }
}
