//! Typed client for the AuthService endpoints.

use serde::de::DeserializeOwned;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::transport::SessionTransport;
use crate::types::{AuthStatus, Credentials, LoginResponse};

/// Client for the AuthService HTTP contract.
///
/// Generic over the transport so the HTTP layer can be mocked in tests.
#[derive(Debug, Clone)]
pub struct AuthClient<T> {
    config: AuthConfig,
    transport: T,
}

impl<T: SessionTransport> AuthClient<T> {
    /// Creates a client for the configured AuthService.
    #[must_use]
    pub fn new(config: AuthConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the client's configuration.
    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Checks whether the ambient session is authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not match
    /// the contract.
    pub async fn status(&self) -> Result<AuthStatus, AuthError> {
        let value = self.transport.get_json(&self.config.status_url()).await?;
        decode(value)
    }

    /// Submits credentials for verification.
    ///
    /// A rejection is not an error: the service answers `success: false` with
    /// an optional message, and that still decodes into a [`LoginResponse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not match
    /// the contract.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let body = serde_json::json!({
            "username": credentials.username(),
            "password": credentials.password(),
        });
        let value = self
            .transport
            .post_json(&self.config.login_url(), &body)
            .await?;
        decode(value)
    }

    /// Returns the OAuth-initiation URL for a full-page redirect.
    #[must_use]
    pub fn oauth_url(&self) -> String {
        self.config.oauth_url()
    }
}

fn decode<R: DeserializeOwned>(value: serde_json::Value) -> Result<R, AuthError> {
    serde_json::from_value(value).map_err(|e| AuthError::MalformedResponse {
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records every request and replays canned responses in order.
    struct MockTransport {
        requests: RefCell<Vec<RecordedRequest>>,
        responses: RefCell<Vec<Result<serde_json::Value, TransportError>>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum RecordedRequest {
        Get { url: String },
        Post { url: String, body: serde_json::Value },
    }

    impl MockTransport {
        fn replying(responses: Vec<Result<serde_json::Value, TransportError>>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                responses: RefCell::new(responses),
            }
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.borrow().clone()
        }

        fn next_response(&self) -> Result<serde_json::Value, TransportError> {
            self.responses.borrow_mut().remove(0)
        }
    }

    #[async_trait(?Send)]
    impl<'a> SessionTransport for &'a MockTransport {
        async fn get_json(&self, url: &str) -> Result<serde_json::Value, TransportError> {
            self.requests.borrow_mut().push(RecordedRequest::Get {
                url: url.to_string(),
            });
            self.next_response()
        }

        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value, TransportError> {
            self.requests.borrow_mut().push(RecordedRequest::Post {
                url: url.to_string(),
                body: body.clone(),
            });
            self.next_response()
        }
    }

    fn test_config() -> AuthConfig {
        AuthConfig::new("https://auth.example.com")
    }

    #[tokio::test]
    async fn status_issues_one_get_to_the_status_url() {
        let transport = MockTransport::replying(vec![Ok(serde_json::json!({
            "isAuthenticated": true,
            "googleId": "g-123",
        }))]);
        let client = AuthClient::new(test_config(), &transport);

        let status = client.status().await.expect("status");

        assert!(status.is_authenticated);
        assert_eq!(status.google_id.as_deref(), Some("g-123"));
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Get {
                url: "https://auth.example.com/api/auth/status".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn login_posts_credentials_as_json() {
        let transport =
            MockTransport::replying(vec![Ok(serde_json::json!({"success": true}))]);
        let client = AuthClient::new(test_config(), &transport);
        let credentials = Credentials::new("alice", "hunter2").expect("valid credentials");

        let response = client.login(&credentials).await.expect("login");

        assert!(response.success);
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Post {
                url: "https://auth.example.com/api/auth/login".to_string(),
                body: serde_json::json!({"username": "alice", "password": "hunter2"}),
            }]
        );
    }

    #[tokio::test]
    async fn login_rejection_decodes_without_error() {
        let transport = MockTransport::replying(vec![Ok(serde_json::json!({
            "success": false,
            "message": "Invalid username or password.",
        }))]);
        let client = AuthClient::new(test_config(), &transport);
        let credentials = Credentials::new("alice", "wrong").expect("valid credentials");

        let response = client.login(&credentials).await.expect("login");

        assert!(!response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("Invalid username or password.")
        );
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_transport_error() {
        let transport = MockTransport::replying(vec![Err(TransportError::Request {
            details: "connection refused".to_string(),
        })]);
        let client = AuthClient::new(test_config(), &transport);

        let err = client.status().await.expect_err("must fail");

        assert!(matches!(err, AuthError::Transport { .. }));
    }

    #[tokio::test]
    async fn non_contract_json_surfaces_as_malformed_response() {
        let transport =
            MockTransport::replying(vec![Ok(serde_json::json!("not an object"))]);
        let client = AuthClient::new(test_config(), &transport);

        let err = client.status().await.expect_err("must fail");

        assert!(matches!(err, AuthError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn invalid_credentials_never_reach_the_transport() {
        // Validation happens at construction, so there is no credentials
        // value to submit and the transport sees nothing.
        let transport = MockTransport::replying(vec![]);
        let _client = AuthClient::new(test_config(), &transport);

        assert!(Credentials::new("", "x").is_err());
        assert!(Credentials::new("x", "").is_err());
        assert!(transport.requests().is_empty());
    }
}
