//! Keyed store contract for per-identity login attempt state.

use async_trait::async_trait;

use crate::domain::entities::login_attempt::LoginAttemptState;
use crate::errors::DomainError;

/// Repository trait for `LoginAttemptState` persistence
///
/// Every lockout transition is one logical read-modify-write against a single
/// identity key. Implementations must make that unit atomic per identity
/// (a transaction or a compare-and-swap retry loop); concurrent updates for
/// different identities must not block each other. Without this, concurrent
/// failure increments can lose updates.
#[async_trait]
pub trait LoginAttemptRepository: Send + Sync {
    /// Fetch the state for an identity
    ///
    /// # Returns
    /// * `Ok(Some(state))` - Known identity
    /// * `Ok(None)` - Identity has never failed a login; absence is not lockout
    /// * `Err(DomainError)` - Store failure
    async fn get(&self, identity: &str) -> Result<Option<LoginAttemptState>, DomainError>;

    /// Store the state for an identity, inserting or overwriting
    async fn put(&self, state: LoginAttemptState) -> Result<(), DomainError>;
}
