//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, VerificationError};

use ag_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Store or other infrastructure failure; retryable, never a domain outcome
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
            }
            DomainError::NotFound { resource } => ErrorResponse::new(
                error_codes::NOT_FOUND,
                format!("Resource not found: {resource}"),
            ),
            // Internal failures surface a generic message; details stay in logs
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
            }
            DomainError::Auth(auth_err) => auth_err.into(),
            DomainError::Verification(verification_err) => verification_err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_response() {
        let err = DomainError::Validation {
            message: "email must not be empty".to_string(),
        };
        let response: ErrorResponse = (&err).into();

        assert_eq!(response.error, "VALIDATION_ERROR");
        assert_eq!(response.message, "email must not be empty");
    }

    #[test]
    fn test_internal_error_response_hides_details() {
        let err = DomainError::Internal {
            message: "connection pool exhausted".to_string(),
        };
        let response: ErrorResponse = (&err).into();

        assert_eq!(response.error, "INTERNAL_ERROR");
        assert!(!response.message.contains("pool"));
    }

    #[test]
    fn test_bridged_errors_keep_their_own_codes() {
        let err = DomainError::from(AuthError::AuthenticationFailed);
        let response: ErrorResponse = (&err).into();
        assert_eq!(response.error, "AUTHENTICATION_FAILED");

        let err = DomainError::from(VerificationError::RateLimited);
        let response: ErrorResponse = (&err).into();
        assert_eq!(response.error, "RATE_LIMIT_EXCEEDED");
    }
}
