//! Tests for the email verification lifecycle

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::{EmailVerificationToken, MAX_RESEND_PER_HOUR};
use crate::errors::{DomainError, VerificationError};
use crate::repositories::{
    MockUserRepository, MockVerificationTokenRepository, UserRepository,
    VerificationTokenRepository,
};
use crate::services::token_generator::SecureTokenGenerator;
use crate::services::verification::EmailVerificationService;

use super::mocks::MockEmailService;

type TestService =
    EmailVerificationService<MockVerificationTokenRepository, MockUserRepository, MockEmailService>;

struct Fixture {
    service: TestService,
    token_repo: Arc<MockVerificationTokenRepository>,
    user_repo: Arc<MockUserRepository>,
    email: Arc<MockEmailService>,
    user: User,
}

async fn fixture() -> Fixture {
    fixture_with_email(MockEmailService::new()).await
}

async fn fixture_with_email(email: MockEmailService) -> Fixture {
    let user = User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "opaque-hash".to_string(),
    );
    let token_repo = Arc::new(MockVerificationTokenRepository::new());
    let user_repo = Arc::new(MockUserRepository::with_existing_user(user.clone()).await);
    let email = Arc::new(email);
    let service = EmailVerificationService::with_defaults(
        Arc::clone(&token_repo),
        Arc::clone(&user_repo),
        Arc::clone(&email),
    );
    Fixture {
        service,
        token_repo,
        user_repo,
        email,
        user,
    }
}

fn assert_verification_err(result: Result<(), DomainError>, expected: VerificationError) {
    match result {
        Err(DomainError::Verification(actual)) => assert_eq!(actual, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

#[tokio::test]
async fn issue_stores_digest_never_raw_token() {
    let f = fixture().await;

    f.service.send_verification_email(&f.user).await.unwrap();

    let raw = f.email.last_raw_token().unwrap();
    assert!(!f.token_repo.contains_value(&raw).await);

    let digest = SecureTokenGenerator::hash(&raw);
    let stored = f.token_repo.find_by_hash(&digest).await.unwrap().unwrap();
    assert_eq!(stored.user_id, f.user.id);
    assert!(!stored.used);
}

#[tokio::test]
async fn issue_rejects_already_verified_user() {
    let f = fixture().await;
    let mut verified = f.user.clone();
    verified.verify_email();

    let result = f.service.send_verification_email(&verified).await;
    assert_verification_err(result, VerificationError::AlreadyVerified);
    assert_eq!(f.email.sent_count(), 0);
}

#[tokio::test]
async fn reissue_invalidates_previous_token() {
    let f = fixture().await;

    f.service.send_verification_email(&f.user).await.unwrap();
    let first_raw = f.email.last_raw_token().unwrap();

    f.service.send_verification_email(&f.user).await.unwrap();
    let second_raw = f.email.last_raw_token().unwrap();
    assert_ne!(first_raw, second_raw);

    // At most one token survives, and it is the newest one
    assert_eq!(f.token_repo.len().await, 1);
    assert_verification_err(
        f.service.verify_email(&first_raw).await,
        VerificationError::InvalidToken,
    );
    f.service.verify_email(&second_raw).await.unwrap();
}

#[tokio::test]
async fn verify_succeeds_once_then_reports_already_used() {
    let f = fixture().await;

    f.service.send_verification_email(&f.user).await.unwrap();
    let raw = f.email.last_raw_token().unwrap();

    f.service.verify_email(&raw).await.unwrap();
    let user = f.user_repo.find_by_id(f.user.id).await.unwrap().unwrap();
    assert!(user.email_verified);

    assert_verification_err(
        f.service.verify_email(&raw).await,
        VerificationError::AlreadyUsed,
    );
}

#[tokio::test]
async fn verify_rejects_unknown_token() {
    let f = fixture().await;

    assert_verification_err(
        f.service.verify_email("not-a-real-token").await,
        VerificationError::InvalidToken,
    );
}

#[tokio::test]
async fn expired_token_reports_expired_and_is_removed() {
    let f = fixture().await;

    f.service.send_verification_email(&f.user).await.unwrap();
    let raw = f.email.last_raw_token().unwrap();
    let digest = SecureTokenGenerator::hash(&raw);

    // Back-date the stored record past its window
    let mut token = f.token_repo.find_by_hash(&digest).await.unwrap().unwrap();
    token.expires_at = Utc::now() - Duration::hours(1);
    f.token_repo.update(token).await.unwrap();

    assert_verification_err(
        f.service.verify_email(&raw).await,
        VerificationError::TokenExpired,
    );

    // Eager cleanup: the record is gone, a retry sees an unknown token
    assert!(f.token_repo.find_by_hash(&digest).await.unwrap().is_none());
    assert_verification_err(
        f.service.verify_email(&raw).await,
        VerificationError::InvalidToken,
    );
}

#[tokio::test]
async fn expiry_check_precedes_used_check() {
    let f = fixture().await;

    f.service.send_verification_email(&f.user).await.unwrap();
    let raw = f.email.last_raw_token().unwrap();
    let digest = SecureTokenGenerator::hash(&raw);

    let mut token = f.token_repo.find_by_hash(&digest).await.unwrap().unwrap();
    token.mark_used();
    token.expires_at = Utc::now() - Duration::hours(1);
    f.token_repo.update(token).await.unwrap();

    // Expired-and-used reports expiry, not reuse
    assert_verification_err(
        f.service.verify_email(&raw).await,
        VerificationError::TokenExpired,
    );
}

#[tokio::test]
async fn resend_for_unknown_email_reports_generic_success() {
    let f = fixture().await;

    f.service
        .resend_verification_email("ghost@example.com")
        .await
        .unwrap();
    assert_eq!(f.email.sent_count(), 0);
}

#[tokio::test]
async fn resend_for_verified_email_is_a_silent_noop() {
    let f = fixture().await;
    let mut user = f.user.clone();
    user.verify_email();
    f.user_repo.update(user).await.unwrap();

    f.service
        .resend_verification_email("alice@example.com")
        .await
        .unwrap();
    assert_eq!(f.email.sent_count(), 0);
}

#[tokio::test]
async fn resend_is_rate_limited_at_three_tokens_per_hour() {
    let f = fixture().await;

    for i in 0..MAX_RESEND_PER_HOUR {
        f.token_repo
            .insert(EmailVerificationToken::new(
                f.user.id,
                format!("digest-{i}"),
            ))
            .await
            .unwrap();
    }

    assert_verification_err(
        f.service.resend_verification_email("alice@example.com").await,
        VerificationError::RateLimited,
    );
    assert_eq!(f.email.sent_count(), 0);
}

#[tokio::test]
async fn tokens_outside_the_window_do_not_count_toward_the_limit() {
    let f = fixture().await;

    for i in 0..MAX_RESEND_PER_HOUR {
        let mut token = EmailVerificationToken::new(f.user.id, format!("digest-{i}"));
        token.created_at = Utc::now() - Duration::hours(2);
        f.token_repo.insert(token).await.unwrap();
    }

    f.service
        .resend_verification_email("alice@example.com")
        .await
        .unwrap();
    assert_eq!(f.email.sent_count(), 1);
}

#[tokio::test]
async fn mailer_failure_does_not_roll_back_the_issued_token() {
    let f = fixture_with_email(MockEmailService::failing()).await;

    f.service.send_verification_email(&f.user).await.unwrap();

    // The token was persisted before dispatch and is fully usable
    let raw = f.email.last_raw_token().unwrap();
    f.service.verify_email(&raw).await.unwrap();
}

#[tokio::test]
async fn purge_removes_only_expired_tokens() {
    let f = fixture().await;

    let mut expired = EmailVerificationToken::new(f.user.id, "expired-digest".to_string());
    expired.expires_at = Utc::now() - Duration::hours(1);
    f.token_repo.insert(expired).await.unwrap();
    f.token_repo
        .insert(EmailVerificationToken::new(
            f.user.id,
            "live-digest".to_string(),
        ))
        .await
        .unwrap();

    let removed = f.service.purge_expired_tokens().await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(f.token_repo.len().await, 1);
    assert!(f
        .token_repo
        .find_by_hash("live-digest")
        .await
        .unwrap()
        .is_some());
}
