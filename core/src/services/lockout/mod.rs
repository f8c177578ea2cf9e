//! Login attempt tracking and account lockout
//!
//! This module implements the per-identity lockout state machine:
//! - Failure counting with a hard lock at the threshold
//! - Idempotent reset on successful login
//! - Lazy lock expiry, healed on the next read or failure
//! - Remaining-attempt and remaining-lock-time queries

mod service;


pub use service::LoginAttemptService;
