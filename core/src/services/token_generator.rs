//! Secure generation and digesting of email verification tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Raw token entropy in bytes (2^256 space, collisions negligible)
pub const TOKEN_BYTES: usize = 32;

/// Generator for opaque single-use verification tokens
///
/// Stateless; all entropy comes from the OS CSPRNG per call.
pub struct SecureTokenGenerator;

impl SecureTokenGenerator {
    /// Generate a fresh 32-byte random token, URL-safe base64 without padding
    ///
    /// The result is safe to embed in an email link or query parameter.
    /// Exhaustion of the OS random source panics inside `fill_bytes` and is
    /// treated as unrecoverable.
    pub fn generate() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    /// SHA-256 digest of a raw token, hex-encoded
    ///
    /// Deterministic with fixed 64-character output; this is the storage and
    /// lookup key for token records. A plain cryptographic hash suffices here
    /// because the input already carries 256 bits of entropy.
    pub fn hash(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
