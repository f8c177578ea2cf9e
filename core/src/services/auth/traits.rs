//! Trait for the opaque password verification capability

/// Trait for password verification integration
///
/// The hashing algorithm is not this core's concern; implementations wrap
/// whatever one-way hash the deployment uses and expose only verify.
pub trait PasswordVerifierTrait: Send + Sync {
    /// Check a candidate password against a stored one-way hash
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}
