//! Email verification token lifecycle
//!
//! This module orchestrates the complete proof-of-email workflow:
//! - Token issue with hashing at rest and email dispatch
//! - Single-use verification with eager cleanup of expired tokens
//! - Enumeration-safe resend with a rolling-window rate limit
//! - Expired-token sweeping

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::EmailVerificationService;
pub use traits::EmailServiceTrait;
