//! In-memory implementation of VerificationTokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_token::EmailVerificationToken;
use crate::errors::DomainError;

use super::trait_::VerificationTokenRepository;

/// Mock token store backed by a HashMap keyed by record id
pub struct MockVerificationTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, EmailVerificationToken>>>,
}

impl MockVerificationTokenRepository {
    /// Create a new, empty mock store
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records, used to assert cleanup behavior
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether any stored digest equals the given text
    ///
    /// Lets tests assert that a raw token value never appears at rest.
    pub async fn contains_value(&self, needle: &str) -> bool {
        let tokens = self.tokens.read().await;
        tokens.values().any(|t| t.token_hash == needle)
    }
}

impl Default for MockVerificationTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationTokenRepository for MockVerificationTokenRepository {
    async fn insert(
        &self,
        token: EmailVerificationToken,
    ) -> Result<EmailVerificationToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.values().any(|t| t.token_hash == token.token_hash) {
            return Err(DomainError::Validation {
                message: "Token digest already exists".to_string(),
            });
        }

        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<EmailVerificationToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.token_hash == token_hash).cloned())
    }

    async fn replace_for_user(
        &self,
        user_id: Uuid,
        token: EmailVerificationToken,
    ) -> Result<EmailVerificationToken, DomainError> {
        // Single write lock held across delete + insert, mirroring the
        // transactional contract of a real store.
        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, t| t.user_id != user_id);
        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn update(
        &self,
        token: EmailVerificationToken,
    ) -> Result<EmailVerificationToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if !tokens.contains_key(&token.id) {
            return Err(DomainError::NotFound {
                resource: "EmailVerificationToken".to_string(),
            });
        }

        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(&id).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.expires_at > now);
        Ok((before - tokens.len()) as u64)
    }

    async fn count_created_since(
        &self,
        user_id: Uuid,
        after: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.user_id == user_id && t.created_at >= after)
            .count() as u64)
    }
}
