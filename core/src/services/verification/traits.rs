//! Trait for the outbound email collaborator

use async_trait::async_trait;

/// Trait for email dispatch integration
///
/// Implementations own transport and templating. The raw token passes
/// through here exactly once, on its way to the user's mailbox; it must not
/// be logged or stored by implementations.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification email carrying the raw token
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider-assigned id of the queued message
    /// * `Err(reason)` - Dispatch failed; the caller treats this as
    ///   non-fatal since the persisted token stays valid for resend
    async fn send_verification_email(
        &self,
        to: &str,
        username: &str,
        raw_token: &str,
    ) -> Result<String, String>;
}
