//! Wire types for the AuthService HTTP contract.
//!
//! Field names follow the service's camelCase JSON. Responses are decoded
//! leniently: a missing boolean reads as `false` and a missing id as `None`,
//! mirroring how the service omits fields it has nothing to say about.

use serde::{Deserialize, Serialize};

/// Login credentials entered by the user.
///
/// Held only transiently in UI state; the constructor is the single
/// validation point, so a `Credentials` value is always submittable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials, rejecting an empty username or password.
    ///
    /// Only the exactly-empty string is rejected; whitespace is forwarded to
    /// the server as entered.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::MissingField`] if either field is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(CredentialsError::MissingField);
        }
        Ok(Self { username, password })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Validation failure when constructing [`Credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// Username or password was empty.
    MissingField,
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "both username and password are required"),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Response of `GET /api/auth/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    /// Whether the ambient session cookie identifies an authenticated user.
    #[serde(default)]
    pub is_authenticated: bool,
    /// Identity marker for the session, when the service provides one.
    #[serde(default)]
    pub google_id: Option<String>,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    #[serde(default)]
    pub success: bool,
    /// Identity marker for the new session, when the service provides one.
    #[serde(default)]
    pub google_id: Option<String>,
    /// Human-readable rejection reason, when the service provides one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Opaque proof of an authenticated session.
///
/// The client persists this string and treats its presence as "logged in";
/// no expiry or revocation check is applied locally. The marker's content is
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityMarker(String);

/// Placeholder marker stored when a successful login carries no id.
///
/// The value is wire-compatible with what downstream views already key off.
const FALLBACK_MARKER: &str = "dummy-google-id";

impl IdentityMarker {
    /// Creates an identity marker from a string.
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }

    /// Returns the placeholder marker used when the service omits an id.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_MARKER.to_string())
    }

    /// Returns the marker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IdentityMarker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IdentityMarker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
