//! Durable store contract for email verification token records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_token::EmailVerificationToken;
use crate::errors::DomainError;

/// Repository trait for `EmailVerificationToken` persistence
///
/// Records are looked up exclusively by token digest; the raw token never
/// reaches this layer.
#[async_trait]
pub trait VerificationTokenRepository: Send + Sync {
    /// Insert a new token record
    async fn insert(&self, token: EmailVerificationToken)
        -> Result<EmailVerificationToken, DomainError>;

    /// Find a token record by its digest
    ///
    /// # Returns
    /// * `Ok(Some(token))` - A record with this digest exists (used or not)
    /// * `Ok(None)` - No such digest
    /// * `Err(DomainError)` - Store failure
    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<EmailVerificationToken>, DomainError>;

    /// Delete all prior tokens for a user and insert the replacement
    ///
    /// This must execute as a single atomic unit (one transaction) so that
    /// two concurrent issues for the same user cannot both leave a surviving
    /// token; at most one valid token per user may exist at any time.
    async fn replace_for_user(
        &self,
        user_id: Uuid,
        token: EmailVerificationToken,
    ) -> Result<EmailVerificationToken, DomainError>;

    /// Persist changes to an existing record (the used flag)
    async fn update(&self, token: EmailVerificationToken)
        -> Result<EmailVerificationToken, DomainError>;

    /// Delete a single record
    ///
    /// # Returns
    /// * `Ok(true)` - Record was deleted
    /// * `Ok(false)` - Record did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every record whose expiry precedes `now`
    ///
    /// # Returns
    /// Number of records removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Count tokens created for a user at or after the given instant
    ///
    /// Drives the rolling-window resend rate limit.
    async fn count_created_since(
        &self,
        user_id: Uuid,
        after: DateTime<Utc>,
    ) -> Result<u64, DomainError>;
}
