//! User entity as seen by the credential-protection core.
//!
//! General user management lives elsewhere; this projection carries only the
//! fields the lockout and verification state machines read or write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, also the identity the lockout tracker is keyed by
    pub username: String,

    /// Email address verification tokens are dispatched to
    pub email: String,

    /// Opaque one-way password hash; verification happens behind a trait
    pub password_hash: String,

    /// Whether the email address has been proven via a verification token
    pub email_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the email address as verified
    pub fn verify_email(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2$opaque".to_string(),
        );

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.email_verified);
    }

    #[test]
    fn test_verify_email() {
        let mut user = User::new(
            "bob".to_string(),
            "bob@example.com".to_string(),
            "hash".to_string(),
        );

        assert!(!user.email_verified);
        user.verify_email();
        assert!(user.email_verified);
    }
}
