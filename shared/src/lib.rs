//! Shared types for the AuthGuard credential protection core
//!
//! This crate provides the pieces every server module agrees on:
//! - Security configuration types (lockout and email verification policy)
//! - Error response structures returned to clients

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{EmailVerificationConfig, LockoutConfig, SecurityConfig};
pub use errors::{error_codes, ErrorResponse};
