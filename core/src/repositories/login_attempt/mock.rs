//! In-memory implementation of LoginAttemptRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::login_attempt::LoginAttemptState;
use crate::errors::DomainError;

use super::trait_::LoginAttemptRepository;

/// Mock login attempt store backed by a HashMap keyed by identity
pub struct MockLoginAttemptRepository {
    states: Arc<RwLock<HashMap<String, LoginAttemptState>>>,
}

impl MockLoginAttemptRepository {
    /// Create a new, empty mock store
    pub fn new() -> Self {
        Self {
            states: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the store with a pre-built state, e.g. a back-dated lock
    pub async fn seed(&self, state: LoginAttemptState) {
        self.states
            .write()
            .await
            .insert(state.identity.clone(), state);
    }
}

impl Default for MockLoginAttemptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginAttemptRepository for MockLoginAttemptRepository {
    async fn get(&self, identity: &str) -> Result<Option<LoginAttemptState>, DomainError> {
        let states = self.states.read().await;
        Ok(states.get(identity).cloned())
    }

    async fn put(&self, state: LoginAttemptState) -> Result<(), DomainError> {
        let mut states = self.states.write().await;
        states.insert(state.identity.clone(), state);
        Ok(())
    }
}
