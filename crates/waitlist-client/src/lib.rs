//! Outbound HTTP client for the waitlist service.
//!
//! Sends `POST {base_url}/WaitLists/joinWaitList` through Spin's outbound
//! HTTP. One attempt per call: no timeout, no retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_client::WaitlistClient;
//! use waitlist_core::{WaitlistApi, WaitlistConfig};
//!
//! // In a server function
//! let client = WaitlistClient::new(WaitlistConfig::from_build_env()?);
//! client.join("ada@example.com").await?;
//! ```

mod error;
mod request;

pub use error::ClientError;
pub use request::{OutboundRequest, RawResponse};

use async_trait::async_trait;
use waitlist_core::{
    email_domain, interpret_response, JoinRequest, SubmitError, WaitlistApi, WaitlistConfig,
};

/// Client for the waitlist service.
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    config: WaitlistConfig,
}

impl WaitlistClient {
    /// Create a client for the configured service.
    pub fn new(config: WaitlistConfig) -> Self {
        Self { config }
    }

    /// Build the signup request for `email`.
    pub fn join_request(&self, email: &str) -> Result<OutboundRequest, ClientError> {
        OutboundRequest::post(self.config.join_url())
            .header("Accept", "application/json")
            .json(&JoinRequest::new(email))
    }

    /// Send a POST request and collect the response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ClientError> {
        use spin_sdk::http::{Method as SpinMethod, Request, Response};

        let mut builder = Request::builder();
        builder.method(SpinMethod::Post);
        builder.uri(&request.url);
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder.body(body);
        }

        let response: Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| ClientError::RequestError(e.to_string()))?;

        Ok(RawResponse::new(*response.status(), response.body().to_vec()))
    }

    /// Send a request and collect the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(&self, _request: OutboundRequest) -> Result<RawResponse, ClientError> {
        Err(ClientError::Unsupported)
    }
}

#[async_trait(?Send)]
impl WaitlistApi for WaitlistClient {
    async fn join(&self, email: &str) -> Result<(), SubmitError> {
        let request = self.join_request(email)?;
        let url = request.url.clone();

        let response = match self.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "waitlist request failed");
                return Err(e.into());
            }
        };

        tracing::info!(
            url = %url,
            status = response.status,
            domain = email_domain(email),
            "waitlist service answered"
        );
        interpret_response(response.status, &response.body)
    }
}
