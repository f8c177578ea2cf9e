//! Repository interfaces the security state machines live behind.
//!
//! All state sits in durable stores; these traits are the sole point of
//! contention between concurrent request contexts. In-memory mock
//! implementations for tests live next to each trait.

pub mod login_attempt;
pub mod user;
pub mod verification_token;

pub use login_attempt::{LoginAttemptRepository, MockLoginAttemptRepository};
pub use user::{MockUserRepository, UserRepository};
pub use verification_token::{MockVerificationTokenRepository, VerificationTokenRepository};
