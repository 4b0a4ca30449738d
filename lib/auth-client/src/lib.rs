//! Client for the Mini-CRM authentication service.
//!
//! This crate speaks the AuthService HTTP contract on behalf of the web UI:
//! - Wire types for the status and login endpoints (`AuthStatus`,
//!   `LoginResponse`, `Credentials`)
//! - A `SessionTransport` seam over ambient-credential HTTP requests, with a
//!   `reqwest`-backed implementation
//! - `AuthClient`, the typed surface over the three endpoints
//! - A pure decision layer (`flow`) mapping server responses to UI outcomes
//!
//! The AuthService verifies credentials and orchestrates the OAuth flow; this
//! crate never sees a password beyond forwarding it and never inspects the
//! identity marker it hands back.
//!
//! # Example
//!
//! ```no_run
//! use minicrm_auth_client::{AuthClient, AuthConfig, ReqwestTransport};
//!
//! # async fn demo() -> Result<(), minicrm_auth_client::AuthError> {
//! let transport = ReqwestTransport::new().expect("HTTP client");
//! let client = AuthClient::new(AuthConfig::from_build_env(), transport);
//!
//! let status = client.status().await?;
//! if status.is_authenticated {
//!     // already signed in; the UI can navigate straight to /home
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use client::AuthClient;
pub use config::AuthConfig;
pub use error::{AuthError, TransportError};
pub use flow::{LoginOutcome, StatusOutcome, login_outcome, status_outcome};
pub use transport::{ReqwestTransport, SessionTransport};
pub use types::{AuthStatus, Credentials, CredentialsError, IdentityMarker, LoginResponse};
