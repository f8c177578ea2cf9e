//! Configuration types shared across server modules

mod security;

pub use security::{EmailVerificationConfig, LockoutConfig, SecurityConfig};
