//! Error types for AuthService calls.
//!
//! Every failure of a network call is terminal for that attempt; the UI
//! surfaces a single retry prompt and the caller decides what to log.

use std::fmt;

/// Errors from the session transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    Request { details: String },
    /// The response body was not valid JSON.
    Decode { details: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { details } => {
                write!(f, "request failed: {details}")
            }
            Self::Decode { details } => {
                write!(f, "response body was not valid JSON: {details}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Errors from [`AuthClient`](crate::AuthClient) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The transport failed before a JSON body was obtained.
    Transport { source: TransportError },
    /// The service returned JSON that does not match the contract.
    MalformedResponse { details: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { source } => {
                write!(f, "transport error: {source}")
            }
            Self::MalformedResponse { details } => {
                write!(f, "malformed AuthService response: {details}")
            }
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source } => Some(source),
            Self::MalformedResponse { .. } => None,
        }
    }
}

impl From<TransportError> for AuthError {
    fn from(source: TransportError) -> Self {
        Self::Transport { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_request_display() {
        let err = TransportError::Request {
            details: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("request failed"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn transport_error_decode_display() {
        let err = TransportError::Decode {
            details: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn auth_error_wraps_transport_error() {
        let err: AuthError = TransportError::Request {
            details: "timed out".to_string(),
        }
        .into();
        assert!(err.to_string().contains("transport error"));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn auth_error_malformed_response_display() {
        let err = AuthError::MalformedResponse {
            details: "invalid type: string".to_string(),
        };
        assert!(err.to_string().contains("malformed"));
    }
}
