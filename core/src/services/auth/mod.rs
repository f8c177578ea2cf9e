//! Authentication gate
//!
//! The single entry point for credential checks. The gate consults the
//! lockout tracker before touching credentials and reports every outcome
//! back to it; nothing else in the system records login results.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::AuthenticationGate;
pub use traits::PasswordVerifierTrait;
