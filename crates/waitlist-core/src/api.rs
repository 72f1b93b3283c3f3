//! Contract of the remote waitlist service.

use async_trait::async_trait;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{Msg, SubmitError};

/// Resource path of the signup endpoint, relative to the base URL.
pub const JOIN_WAITLIST_PATH: &str = "/WaitLists/joinWaitList";

/// Body of `POST /WaitLists/joinWaitList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub email: String,
}

impl JoinRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Error body returned by the service on rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Remote waitlist service.
///
/// Implementations make exactly one attempt per call.
#[async_trait(?Send)]
pub trait WaitlistApi {
    /// Add `email` to the waitlist.
    async fn join(&self, email: &str) -> Result<(), SubmitError>;
}

/// Map a raw response to the submission result.
///
/// Any 2xx counts as success and the body is not inspected. Anything else
/// is a rejection, carrying the body's `message` when there is one.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<(), SubmitError> {
    let ok = StatusCode::from_u16(status)
        .map(|s| s.is_success())
        .unwrap_or(false);
    if ok {
        return Ok(());
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    Err(SubmitError::Rejected { status, message })
}

/// Run one submission attempt and turn the outcome into a workflow message.
pub async fn submit<A>(api: &A, email: &str) -> Msg
where
    A: WaitlistApi + ?Sized,
{
    match api.join(email).await {
        Ok(()) => Msg::SubmitSucceeded,
        Err(e) => Msg::SubmitFailed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct Fixed(Result<(), SubmitError>);

    #[async_trait(?Send)]
    impl WaitlistApi for Fixed {
        async fn join(&self, _email: &str) -> Result<(), SubmitError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(JoinRequest::new("ada@example.com")).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "ada@example.com" }));
    }

    #[test]
    fn test_any_2xx_is_success() {
        assert_eq!(interpret_response(200, b""), Ok(()));
        assert_eq!(interpret_response(201, b"{\"id\":1}"), Ok(()));
        assert_eq!(interpret_response(204, b"not json"), Ok(()));
    }

    #[test]
    fn test_rejection_with_message() {
        let body = br#"{"message":"Email already registered","code":"DUPLICATE"}"#;
        assert_eq!(
            interpret_response(409, body),
            Err(SubmitError::Rejected {
                status: 409,
                message: Some("Email already registered".to_string()),
            })
        );
    }

    #[test]
    fn test_rejection_without_message() {
        let bodies: [&[u8]; 4] = [b"", b"<html>oops</html>", b"{}", b"{\"message\":null}"];
        for body in bodies {
            assert_eq!(
                interpret_response(500, body),
                Err(SubmitError::Rejected {
                    status: 500,
                    message: None,
                })
            );
        }
    }

    #[test]
    fn test_redirect_is_not_success() {
        assert!(interpret_response(302, b"").is_err());
    }

    #[test]
    fn test_submit_maps_outcomes() {
        assert_eq!(block_on(submit(&Fixed(Ok(())), "a@b.co")), Msg::SubmitSucceeded);

        let err = SubmitError::Transport("refused".to_string());
        assert_eq!(
            block_on(submit(&Fixed(Err(err.clone())), "a@b.co")),
            Msg::SubmitFailed(err)
        );
    }
}
