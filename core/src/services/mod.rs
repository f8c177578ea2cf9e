//! Business services containing the security state machines.

pub mod auth;
pub mod lockout;
pub mod token_generator;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthenticationGate, PasswordVerifierTrait};
pub use lockout::LoginAttemptService;
pub use token_generator::SecureTokenGenerator;
pub use verification::{EmailServiceTrait, EmailVerificationService};
