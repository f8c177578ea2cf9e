//! Email verification lifecycle implementation

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use ag_shared::config::EmailVerificationConfig;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::EmailVerificationToken;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::{UserRepository, VerificationTokenRepository};
use crate::services::token_generator::SecureTokenGenerator;

use super::traits::EmailServiceTrait;

/// Service managing issue, verification, and resend of email tokens
///
/// Only token digests reach the store; the raw value travels to the email
/// collaborator once and is then dropped. Email dispatch happens after the
/// record is durably persisted and is fire-and-forget: a delivery failure
/// leaves the token valid and recoverable through resend.
pub struct EmailVerificationService<T, U, M>
where
    T: VerificationTokenRepository,
    U: UserRepository,
    M: EmailServiceTrait,
{
    /// Token record store
    token_repository: Arc<T>,
    /// User lookup/update collaborator
    user_repository: Arc<U>,
    /// Outbound email collaborator
    email_service: Arc<M>,
    /// Verification policy
    config: EmailVerificationConfig,
}

impl<T, U, M> EmailVerificationService<T, U, M>
where
    T: VerificationTokenRepository,
    U: UserRepository,
    M: EmailServiceTrait,
{
    /// Create a new lifecycle service
    pub fn new(
        token_repository: Arc<T>,
        user_repository: Arc<U>,
        email_service: Arc<M>,
        config: EmailVerificationConfig,
    ) -> Self {
        Self {
            token_repository,
            user_repository,
            email_service,
            config,
        }
    }

    /// Create a new lifecycle service with the default policy (24 h window,
    /// 3 resends per hour)
    pub fn with_defaults(
        token_repository: Arc<T>,
        user_repository: Arc<U>,
        email_service: Arc<M>,
    ) -> Self {
        Self::new(
            token_repository,
            user_repository,
            email_service,
            EmailVerificationConfig::default(),
        )
    }

    /// Issue a fresh verification token and email it to the user
    ///
    /// All prior tokens for the user are deleted in the same atomic store
    /// operation that inserts the replacement, so at most one valid token
    /// exists per user.
    ///
    /// # Returns
    /// * `Ok(())` - Token persisted; email handed to the collaborator
    /// * `Err(VerificationError::AlreadyVerified)` - Nothing to prove
    pub async fn send_verification_email(&self, user: &User) -> DomainResult<()> {
        if user.email_verified {
            return Err(VerificationError::AlreadyVerified.into());
        }

        let raw_token = SecureTokenGenerator::generate();
        let token_hash = SecureTokenGenerator::hash(&raw_token);
        let token = EmailVerificationToken::new_with_expiration(
            user.id,
            token_hash,
            self.config.token_expiration_hours,
        );

        self.token_repository
            .replace_for_user(user.id, token)
            .await?;

        // Dispatch after the record is durable. Delivery is the collaborator's
        // concern; a failure here must not roll back the issued token.
        match self
            .email_service
            .send_verification_email(&user.email, &user.username, &raw_token)
            .await
        {
            Ok(message_id) => {
                info!(
                    username = %user.username,
                    message_id = %message_id,
                    event = "verification_email_sent",
                    "Verification email dispatched"
                );
            }
            Err(error) => {
                warn!(
                    username = %user.username,
                    error = %error,
                    event = "verification_email_failed",
                    "Verification email dispatch failed; token stays valid for resend"
                );
            }
        }

        Ok(())
    }

    /// Consume a raw token and mark the owning user's email as verified
    ///
    /// The expiry check deliberately precedes the used check: an expired-and-
    /// used record reports expiry, and expired records are deleted eagerly
    /// here regardless of their used flag. Marking the user verified and the
    /// token used are two writes the store is expected to wrap in one
    /// transaction.
    ///
    /// # Returns
    /// * `Ok(())` - Email verified; the token can never verify again
    /// * `Err(VerificationError::InvalidToken)` - No record with this digest
    /// * `Err(VerificationError::TokenExpired)` - Past the validity window
    /// * `Err(VerificationError::AlreadyUsed)` - Token already consumed
    pub async fn verify_email(&self, raw_token: &str) -> DomainResult<()> {
        let token_hash = SecureTokenGenerator::hash(raw_token);

        let Some(mut token) = self.token_repository.find_by_hash(&token_hash).await? else {
            warn!(
                event = "verification_token_unknown",
                "Verification attempted with unknown token"
            );
            return Err(VerificationError::InvalidToken.into());
        };

        if token.is_expired() {
            self.token_repository.delete(token.id).await?;
            info!(
                user_id = %token.user_id,
                event = "verification_token_expired",
                "Expired verification token removed"
            );
            return Err(VerificationError::TokenExpired.into());
        }

        if token.used {
            warn!(
                user_id = %token.user_id,
                event = "verification_token_reused",
                "Replay of an already-used verification token"
            );
            return Err(VerificationError::AlreadyUsed.into());
        }

        let mut user = self
            .user_repository
            .find_by_id(token.user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        user.verify_email();
        self.user_repository.update(user.clone()).await?;

        token.mark_used();
        self.token_repository.update(token).await?;

        info!(
            username = %user.username,
            event = "email_verified",
            "Email verified successfully"
        );
        Ok(())
    }

    /// Re-issue a verification token for the given email address
    ///
    /// Enumeration-safe: an unknown address and an already-verified one both
    /// return the same generic success as a real send. The only distinct
    /// outcome is the rate limit, which presumes the caller owns the address.
    ///
    /// # Returns
    /// * `Ok(())` - Generic success, whether or not anything was sent
    /// * `Err(VerificationError::RateLimited)` - Cap reached inside the
    ///   rolling window
    pub async fn resend_verification_email(&self, email: &str) -> DomainResult<()> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            // Same outward signal as a real send, to prevent email enumeration
            warn!(
                event = "resend_unknown_email",
                "Resend requested for non-existent email"
            );
            return Ok(());
        };

        if user.email_verified {
            info!(
                username = %user.username,
                event = "resend_already_verified",
                "Resend requested for already verified email"
            );
            return Ok(());
        }

        let window_start = Utc::now() - Duration::minutes(self.config.resend_window_minutes);
        let recent = self
            .token_repository
            .count_created_since(user.id, window_start)
            .await?;

        if recent >= u64::from(self.config.max_resend_per_window) {
            warn!(
                username = %user.username,
                recent_tokens = recent,
                event = "resend_rate_limited",
                "Verification email resend rate limit reached"
            );
            return Err(VerificationError::RateLimited.into());
        }

        self.send_verification_email(&user).await
    }

    /// Remove every token past its validity window
    ///
    /// Expired tokens are also cleaned eagerly at verify time; this sweep
    /// collects the ones nobody ever tried to use.
    ///
    /// # Returns
    /// Number of records removed
    pub async fn purge_expired_tokens(&self) -> DomainResult<u64> {
        let removed = self.token_repository.delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!(
                removed = removed,
                event = "expired_tokens_purged",
                "Expired verification tokens removed"
            );
        }
        Ok(removed)
    }
}
