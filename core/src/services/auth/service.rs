//! Authentication gate implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{LoginAttemptRepository, UserRepository};
use crate::services::lockout::LoginAttemptService;

use super::traits::PasswordVerifierTrait;

/// Gate every login attempt passes through
///
/// Lock status is checked before the credential, so a locked account's
/// password is never evaluated. Unknown usernames and wrong passwords are
/// reported to the tracker and to the caller identically.
pub struct AuthenticationGate<U, L, P>
where
    U: UserRepository,
    L: LoginAttemptRepository,
    P: PasswordVerifierTrait,
{
    /// User lookup collaborator
    user_repository: Arc<U>,
    /// Lockout tracker fed by this gate
    login_attempts: Arc<LoginAttemptService<L>>,
    /// Opaque password verification capability
    password_verifier: Arc<P>,
}

impl<U, L, P> AuthenticationGate<U, L, P>
where
    U: UserRepository,
    L: LoginAttemptRepository,
    P: PasswordVerifierTrait,
{
    /// Create a new authentication gate
    pub fn new(
        user_repository: Arc<U>,
        login_attempts: Arc<LoginAttemptService<L>>,
        password_verifier: Arc<P>,
    ) -> Self {
        Self {
            user_repository,
            login_attempts,
            password_verifier,
        }
    }

    /// Authenticate a username/password pair
    ///
    /// # Returns
    /// * `Ok(User)` - Credentials valid; failure history reset
    /// * `Err(AuthError::AccountLocked)` - Identity locked out; credentials
    ///   were not evaluated
    /// * `Err(AuthError::AuthenticationFailed)` - Unknown username or wrong
    ///   password, indistinguishably
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<User> {
        if self.login_attempts.is_account_locked(username).await? {
            let minutes = self
                .login_attempts
                .remaining_lock_minutes(username)
                .await?
                .max(1);
            warn!(
                identity = username,
                remaining_minutes = minutes,
                event = "login_rejected_locked",
                "Login attempt against a locked account"
            );
            return Err(AuthError::AccountLocked { minutes }.into());
        }

        match self.user_repository.find_by_username(username).await? {
            Some(user) if self.password_verifier.verify(password, &user.password_hash) => {
                self.login_attempts.login_succeeded(username).await?;
                info!(
                    identity = username,
                    event = "login_succeeded",
                    "Authentication successful"
                );
                Ok(user)
            }
            _ => {
                // Unknown user and wrong password feed the tracker alike, so
                // the response shape never reveals whether the username exists
                self.login_attempts.login_failed(username).await?;
                Err(AuthError::AuthenticationFailed.into())
            }
        }
    }
}
