//! Mock password verifier for authentication gate tests

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::services::auth::PasswordVerifierTrait;

/// Mock verifier treating the stored hash as the plaintext it should match,
/// while counting how often it is consulted
pub struct MockPasswordVerifier {
    calls: AtomicUsize,
}

impl MockPasswordVerifier {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of verify calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PasswordVerifierTrait for MockPasswordVerifier {
    fn verify(&self, password: &str, password_hash: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        password == password_hash
    }
}
