//! Email verification token entity.
//!
//! Only the SHA-256 digest of a token is ever stored; the raw value crosses
//! the trust boundary to the user's mailbox exactly once at issue time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hours a verification token stays valid after issue
pub const TOKEN_EXPIRATION_HOURS: i64 = 24;

/// Maximum tokens issued per user inside the trailing one-hour window
pub const MAX_RESEND_PER_HOUR: u32 = 3;

/// A stored email verification token record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVerificationToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// SHA-256 digest of the raw token, unique across outstanding tokens
    pub token_hash: String,

    /// The user this token proves the email address of
    pub user_id: Uuid,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the token is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// Set once the token has completed a successful verification
    pub used: bool,
}

impl EmailVerificationToken {
    /// Creates a new token record with the default 24 hour validity window
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self::new_with_expiration(user_id, token_hash, TOKEN_EXPIRATION_HOURS)
    }

    /// Creates a new token record with a custom validity window
    pub fn new_with_expiration(user_id: Uuid, token_hash: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            token_hash,
            user_id,
            created_at: now,
            expires_at: now + Duration::hours(expiration_hours),
            used: false,
        }
    }

    /// Whether the validity window has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// A token is valid for verification iff it is unused and unexpired
    pub fn is_valid(&self) -> bool {
        !self.used && !self.is_expired()
    }

    /// Marks the token as consumed; a token completes verification at most once
    pub fn mark_used(&mut self) {
        self.used = true;
    }
}
