//! Domain entities representing core security objects.

pub mod login_attempt;
pub mod user;
pub mod verification_token;

// Re-export commonly used types
pub use login_attempt::{LoginAttemptState, LOCK_DURATION_MINUTES, MAX_FAILED_ATTEMPTS};
pub use user::User;
pub use verification_token::{
    EmailVerificationToken, MAX_RESEND_PER_HOUR, TOKEN_EXPIRATION_HOURS,
};
