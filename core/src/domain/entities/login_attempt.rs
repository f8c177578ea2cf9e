//! Per-identity login attempt state for brute force protection.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Consecutive failed logins before an account is locked
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// Minutes an account stays locked; expiry is observed lazily on next access
pub const LOCK_DURATION_MINUTES: i64 = 15;

/// Lockout state for one identity, keyed by username
///
/// The record is created implicitly on the first failed attempt and decays
/// back to the zero state on a successful login; it is never explicitly
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttemptState {
    /// The identity (username) this state belongs to
    pub identity: String,

    /// Consecutive failed login attempts since the last success
    pub failed_attempts: u32,

    /// Set while the account is locked; `None` otherwise
    pub lock_time: Option<DateTime<Utc>>,
}

impl LoginAttemptState {
    /// Creates the zero state for an identity
    pub fn new(identity: String) -> Self {
        Self {
            identity,
            failed_attempts: 0,
            lock_time: None,
        }
    }

    /// Whether the lock timestamp is set and its duration has elapsed
    pub fn lock_expired(&self, lock_duration_minutes: i64) -> bool {
        match self.lock_time {
            Some(lock_time) => Utc::now() - lock_time >= Duration::minutes(lock_duration_minutes),
            None => false,
        }
    }

    /// Whether the account is currently locked (lock set and not yet expired)
    pub fn is_locked(&self, lock_duration_minutes: i64) -> bool {
        self.lock_time.is_some() && !self.lock_expired(lock_duration_minutes)
    }

    /// Records one failed attempt, locking the account when the threshold is
    /// reached
    ///
    /// An already-set `lock_time` is never overwritten, so failures against a
    /// locked account do not extend the lock.
    ///
    /// # Returns
    ///
    /// `true` if this failure transitioned the account into the locked state
    pub fn record_failure(&mut self, max_failed_attempts: u32) -> bool {
        self.failed_attempts += 1;
        if self.failed_attempts >= max_failed_attempts && self.lock_time.is_none() {
            self.lock_time = Some(Utc::now());
            true
        } else {
            false
        }
    }

    /// Resets to the zero state (counter cleared, lock removed)
    pub fn reset(&mut self) {
        self.failed_attempts = 0;
        self.lock_time = None;
    }

    /// Whether a reset would change anything
    pub fn is_clean(&self) -> bool {
        self.failed_attempts == 0 && self.lock_time.is_none()
    }

    /// Attempts left before the account locks, saturating at zero
    pub fn remaining_attempts(&self, max_failed_attempts: u32) -> u32 {
        max_failed_attempts.saturating_sub(self.failed_attempts)
    }

    /// Whole minutes until an active lock expires, zero when unlocked
    pub fn remaining_lock_minutes(&self, lock_duration_minutes: i64) -> i64 {
        match self.lock_time {
            Some(lock_time) => {
                let elapsed = Utc::now() - lock_time;
                (lock_duration_minutes - elapsed.num_minutes()).max(0)
            }
            None => 0,
        }
    }
}
