//! AuthService endpoint configuration.
//!
//! The service origin differs per deployment; everything under it is a fixed
//! contract. A WASM client has no process environment, so deployment
//! configuration is baked in at build time via `MINICRM_AUTH_ORIGIN`.

/// Origin used when no build-time override is supplied.
const DEFAULT_ORIGIN: &str = "https://minicrm-backend.onrender.com";

/// Fixed endpoint paths on the AuthService origin.
const STATUS_PATH: &str = "/api/auth/status";
const LOGIN_PATH: &str = "/api/auth/login";
const OAUTH_PATH: &str = "/api/auth/google";

/// Configuration for reaching the AuthService.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Scheme and host of the AuthService, without a trailing slash.
    origin: String,
}

impl AuthConfig {
    /// Creates a configuration for the given origin.
    ///
    /// A trailing slash on the origin is stripped so endpoint URLs join
    /// cleanly.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// Creates a configuration from the build environment.
    ///
    /// Reads `MINICRM_AUTH_ORIGIN` at compile time, falling back to the
    /// production origin.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MINICRM_AUTH_ORIGIN").unwrap_or(DEFAULT_ORIGIN))
    }

    /// Returns the AuthService origin.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the session status-check URL.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.origin)
    }

    /// Returns the credential-login URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.origin)
    }

    /// Returns the OAuth-initiation URL.
    ///
    /// This is a full-page navigation target, not a JSON endpoint.
    #[must_use]
    pub fn oauth_url(&self) -> String {
        format!("{}{OAUTH_PATH}", self.origin)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_join_origin_and_path() {
        let config = AuthConfig::new("https://auth.example.com");
        assert_eq!(
            config.status_url(),
            "https://auth.example.com/api/auth/status"
        );
        assert_eq!(
            config.login_url(),
            "https://auth.example.com/api/auth/login"
        );
        assert_eq!(
            config.oauth_url(),
            "https://auth.example.com/api/auth/google"
        );
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = AuthConfig::new("https://auth.example.com//");
        assert_eq!(config.origin(), "https://auth.example.com");
        assert_eq!(
            config.status_url(),
            "https://auth.example.com/api/auth/status"
        );
    }

    #[test]
    fn build_env_config_has_an_origin() {
        let config = AuthConfig::from_build_env();
        assert!(config.origin().starts_with("https://"));
        assert!(!config.origin().ends_with('/'));
    }
}
