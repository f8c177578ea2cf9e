//! Domain-specific error types for authentication and email verification
//!
//! Outward-facing messages deliberately say no more than the caller is
//! entitled to learn: a failed login never reveals whether the username
//! exists, and an invalid token never reveals whether it once existed.

use ag_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authentication-related errors surfaced by the authentication gate
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The identity is locked out; retry after the given number of minutes
    #[error("Account is temporarily locked. Try again in {minutes} minutes")]
    AccountLocked { minutes: i64 },

    /// Wrong password or unknown username; the two are indistinguishable
    #[error("Invalid username or password")]
    AuthenticationFailed,

    /// Internal-only lookup miss; never surfaced on enumeration-sensitive paths
    #[error("User not found")]
    UserNotFound,
}

/// Email verification lifecycle errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Email is already verified")]
    AlreadyVerified,

    #[error("Invalid verification token")]
    InvalidToken,

    #[error("Verification token has expired")]
    TokenExpired,

    #[error("Verification token has already been used")]
    AlreadyUsed,

    #[error("Too many verification emails requested. Please try again later")]
    RateLimited,
}

impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let code = match err {
            AuthError::AccountLocked { .. } => error_codes::ACCOUNT_LOCKED,
            AuthError::AuthenticationFailed => error_codes::AUTHENTICATION_FAILED,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
        };

        let response = ErrorResponse::new(code, err.to_string());
        match err {
            AuthError::AccountLocked { minutes } => {
                response.add_detail("retry_after_minutes", minutes)
            }
            _ => response,
        }
    }
}

impl From<&VerificationError> for ErrorResponse {
    fn from(err: &VerificationError) -> Self {
        let code = match err {
            VerificationError::AlreadyVerified => error_codes::EMAIL_ALREADY_VERIFIED,
            VerificationError::InvalidToken => error_codes::VERIFICATION_TOKEN_INVALID,
            VerificationError::TokenExpired => error_codes::VERIFICATION_TOKEN_EXPIRED,
            VerificationError::AlreadyUsed => error_codes::VERIFICATION_TOKEN_USED,
            VerificationError::RateLimited => error_codes::RATE_LIMIT_EXCEEDED,
        };

        ErrorResponse::new(code, err.to_string())
    }
}
