//! # AuthGuard Core
//!
//! Credential-protection core for the AuthGuard identity provider.
//! This crate contains the account lockout tracker, the email verification
//! token lifecycle, the repository interfaces both state machines live
//! behind, and the domain error types shared with the presentation layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
