//! Security policy configuration for lockout and email verification

use serde::{Deserialize, Serialize};

/// Account lockout policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LockoutConfig {
    /// Number of consecutive failed logins before the account is locked
    pub max_failed_attempts: u32,

    /// Minutes an account stays locked before the lock lazily expires
    pub lock_duration_minutes: i64,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 5,
            lock_duration_minutes: 15,
        }
    }
}

impl LockoutConfig {
    /// Set the failed-attempt threshold
    pub fn with_max_failed_attempts(mut self, attempts: u32) -> Self {
        self.max_failed_attempts = attempts;
        self
    }

    /// Set the lock duration in minutes
    pub fn with_lock_duration_minutes(mut self, minutes: i64) -> Self {
        self.lock_duration_minutes = minutes;
        self
    }
}

/// Email verification token policy
///
/// The resend window and cap are deliberately fixed by default; they mirror
/// the product's abuse limits rather than anything tunable per deployment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailVerificationConfig {
    /// Hours a verification token stays valid after issue
    pub token_expiration_hours: i64,

    /// Maximum tokens issued per user inside the resend window
    pub max_resend_per_window: u32,

    /// Rolling resend window in minutes
    pub resend_window_minutes: i64,
}

impl Default for EmailVerificationConfig {
    fn default() -> Self {
        Self {
            token_expiration_hours: 24,
            max_resend_per_window: 3,
            resend_window_minutes: 60,
        }
    }
}

impl EmailVerificationConfig {
    /// Set the token validity window in hours
    pub fn with_token_expiration_hours(mut self, hours: i64) -> Self {
        self.token_expiration_hours = hours;
        self
    }
}

/// Aggregate security configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// Account lockout policy
    #[serde(default)]
    pub lockout: LockoutConfig,

    /// Email verification token policy
    #[serde(default)]
    pub email_verification: EmailVerificationConfig,
}
