//! Session transport: HTTP with ambient session credentials.
//!
//! The AuthService identifies returning sessions by cookie, so every request
//! must carry the browser's credentials even though the service lives on a
//! different origin. The trait is the seam between the typed client and the
//! HTTP machinery; tests substitute a recording mock.

use async_trait::async_trait;

use crate::error::TransportError;

/// HTTP transport that includes ambient session credentials.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single JS event loop.
#[async_trait(?Send)]
pub trait SessionTransport {
    /// Issues a GET and decodes the response body as JSON.
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, TransportError>;

    /// Issues a POST with a JSON body and decodes the response body as JSON.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}

/// [`SessionTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the transport.
    ///
    /// On wasm32 the underlying `fetch` is configured to include credentials,
    /// so session cookies ride along on cross-origin requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, TransportError> {
        let builder = reqwest::Client::builder();
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        let http = builder.build().map_err(|e| TransportError::Request {
            details: e.to_string(),
        })?;
        Ok(Self { http })
    }

    async fn decode(response: reqwest::Response) -> Result<serde_json::Value, TransportError> {
        // Non-2xx responses are still decoded: the AuthService reports
        // failures in the JSON body, not through status codes.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::Decode {
                details: e.to_string(),
            })
    }
}

#[async_trait(?Send)]
impl SessionTransport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, TransportError> {
        let response =
            self.http
                .get(url)
                .send()
                .await
                .map_err(|e| TransportError::Request {
                    details: e.to_string(),
                })?;
        Self::decode(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, TransportError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                details: e.to_string(),
            })?;
        Self::decode(response).await
    }
}
