//! Decision layer: maps AuthService responses to UI outcomes.
//!
//! Pure functions, so the login screen's observable behavior is testable
//! without a browser. The UI applies the side effects (persisting the
//! identity marker, navigation, showing the message).

use crate::types::{AuthStatus, IdentityMarker, LoginResponse};

/// Validation message shown when either credential field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both username and password.";

/// Rejection message shown when the service supplies none.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Invalid username or password.";

/// Retry prompt shown on a network or parse failure.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// Outcome of the mount-time status probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The ambient session is already authenticated; navigate home.
    Authenticated {
        /// Marker to persist, when the service provided one.
        marker: Option<IdentityMarker>,
    },
    /// No authenticated session; stay on the login form.
    Unauthenticated,
}

/// Outcome of a credential submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; persist the marker and navigate home.
    Authenticated { marker: IdentityMarker },
    /// Credentials rejected; show the message and stay on the form.
    Rejected { message: String },
}

/// Interprets a status-check response.
#[must_use]
pub fn status_outcome(status: AuthStatus) -> StatusOutcome {
    if status.is_authenticated {
        StatusOutcome::Authenticated {
            marker: status.google_id.map(IdentityMarker::new),
        }
    } else {
        StatusOutcome::Unauthenticated
    }
}

/// Interprets a login response.
///
/// A successful response without an id still authenticates: the fallback
/// placeholder marker is stored so downstream views see a logged-in session.
#[must_use]
pub fn login_outcome(response: LoginResponse) -> LoginOutcome {
    if response.success {
        LoginOutcome::Authenticated {
            marker: response
                .google_id
                .map_or_else(IdentityMarker::fallback, IdentityMarker::new),
        }
    } else {
        LoginOutcome::Rejected {
            message: response
                .message
                .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_status_carries_the_marker() {
        let outcome = status_outcome(AuthStatus {
            is_authenticated: true,
            google_id: Some("g-123".to_string()),
        });
        assert_eq!(
            outcome,
            StatusOutcome::Authenticated {
                marker: Some(IdentityMarker::new("g-123")),
            }
        );
    }

    #[test]
    fn authenticated_status_without_id_still_authenticates() {
        let outcome = status_outcome(AuthStatus {
            is_authenticated: true,
            google_id: None,
        });
        assert_eq!(outcome, StatusOutcome::Authenticated { marker: None });
    }

    #[test]
    fn unauthenticated_status_ignores_any_id() {
        let outcome = status_outcome(AuthStatus {
            is_authenticated: false,
            google_id: Some("g-123".to_string()),
        });
        assert_eq!(outcome, StatusOutcome::Unauthenticated);
    }

    #[test]
    fn successful_login_uses_the_provided_marker() {
        let outcome = login_outcome(LoginResponse {
            success: true,
            google_id: Some("g-123".to_string()),
            message: None,
        });
        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                marker: IdentityMarker::new("g-123"),
            }
        );
    }

    #[test]
    fn successful_login_without_id_uses_the_fallback_marker() {
        let outcome = login_outcome(LoginResponse {
            success: true,
            google_id: None,
            message: None,
        });
        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                marker: IdentityMarker::fallback(),
            }
        );
    }

    #[test]
    fn rejected_login_uses_the_server_message() {
        let outcome = login_outcome(LoginResponse {
            success: false,
            google_id: None,
            message: Some("Account locked.".to_string()),
        });
        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                message: "Account locked.".to_string(),
            }
        );
    }

    #[test]
    fn rejected_login_without_message_uses_the_fallback_text() {
        let outcome = login_outcome(LoginResponse {
            success: false,
            google_id: None,
            message: None,
        });
        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                message: REJECTED_FALLBACK_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn rejected_login_never_yields_a_marker() {
        // Even if the service leaks an id alongside success=false.
        let outcome = login_outcome(LoginResponse {
            success: false,
            google_id: Some("g-123".to_string()),
            message: None,
        });
        assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
    }
}
