//! Login attempt tracker implementation

use std::sync::Arc;
use tracing::{info, warn};

use ag_shared::config::LockoutConfig;

use crate::domain::entities::login_attempt::LoginAttemptState;
use crate::errors::DomainResult;
use crate::repositories::LoginAttemptRepository;

/// Tracker for failed login attempts and temporary account locks
///
/// The tracker never raises domain errors; transitions are pure state
/// updates, and the authentication gate is responsible for turning "locked"
/// into a denied login. Lock expiry is evaluated lazily: there is no
/// background sweep, so a locked-but-expired account is only unlocked when
/// someone asks about it.
pub struct LoginAttemptService<L>
where
    L: LoginAttemptRepository,
{
    /// Keyed store for per-identity attempt state
    repository: Arc<L>,
    /// Lockout policy
    config: LockoutConfig,
}

impl<L> LoginAttemptService<L>
where
    L: LoginAttemptRepository,
{
    /// Create a new tracker
    pub fn new(repository: Arc<L>, config: LockoutConfig) -> Self {
        Self { repository, config }
    }

    /// Create a new tracker with the default policy (5 attempts, 15 minutes)
    pub fn with_defaults(repository: Arc<L>) -> Self {
        Self::new(repository, LockoutConfig::default())
    }

    /// Record a successful login, resetting any failure history
    ///
    /// Runs even when the account was never locked so that a lingering
    /// counter from earlier failures is always cleared. Idempotent: a clean
    /// state is left untouched.
    pub async fn login_succeeded(&self, identity: &str) -> DomainResult<()> {
        if let Some(mut state) = self.repository.get(identity).await? {
            if !state.is_clean() {
                state.reset();
                self.repository.put(state).await?;
                info!(
                    identity = identity,
                    event = "failed_attempts_reset",
                    "Login succeeded, failed attempt counter reset"
                );
            }
        }
        Ok(())
    }

    /// Record a failed login, locking the account at the threshold
    ///
    /// A stale (expired) lock is reclaimed first, so the failure that arrives
    /// after the lock window counts as the first of a fresh series. State is
    /// created implicitly for identities never seen before.
    pub async fn login_failed(&self, identity: &str) -> DomainResult<()> {
        let mut state = self
            .repository
            .get(identity)
            .await?
            .unwrap_or_else(|| LoginAttemptState::new(identity.to_string()));

        if state.lock_expired(self.config.lock_duration_minutes) {
            state.reset();
        }

        let locked_now = state.record_failure(self.config.max_failed_attempts);
        if locked_now {
            warn!(
                identity = identity,
                failed_attempts = state.failed_attempts,
                lock_duration_minutes = self.config.lock_duration_minutes,
                event = "account_locked",
                "Account locked after repeated failed login attempts"
            );
        } else {
            info!(
                identity = identity,
                failed_attempts = state.failed_attempts,
                max_attempts = self.config.max_failed_attempts,
                event = "login_failed",
                "Failed login attempt recorded"
            );
        }

        self.repository.put(state).await
    }

    /// Check whether an identity is currently locked out
    ///
    /// Unknown identities are not locked. This query heals expired locks as a
    /// side effect: when the lock window has passed, the state is reset and
    /// persisted before `false` is returned.
    pub async fn is_account_locked(&self, identity: &str) -> DomainResult<bool> {
        let Some(mut state) = self.repository.get(identity).await? else {
            return Ok(false);
        };

        if state.lock_time.is_none() {
            return Ok(false);
        }

        if state.lock_expired(self.config.lock_duration_minutes) {
            state.reset();
            self.repository.put(state).await?;
            info!(
                identity = identity,
                event = "lock_expired",
                "Account lock expired, account unlocked"
            );
            return Ok(false);
        }

        Ok(true)
    }

    /// Login attempts left before the identity locks
    ///
    /// Unknown identities report the full threshold. Pure read; expired locks
    /// are not healed here.
    pub async fn get_remaining_attempts(&self, identity: &str) -> DomainResult<u32> {
        let remaining = match self.repository.get(identity).await? {
            Some(state) => state.remaining_attempts(self.config.max_failed_attempts),
            None => self.config.max_failed_attempts,
        };
        Ok(remaining)
    }

    /// Whole minutes until an active lock expires, zero when unlocked
    pub async fn remaining_lock_minutes(&self, identity: &str) -> DomainResult<i64> {
        let minutes = match self.repository.get(identity).await? {
            Some(state) => state.remaining_lock_minutes(self.config.lock_duration_minutes),
            None => 0,
        };
        Ok(minutes)
    }
}
