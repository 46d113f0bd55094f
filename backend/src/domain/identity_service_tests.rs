//! Tests for the identity service.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use super::*;
use crate::domain::error::ErrorCode;
use crate::domain::ports::{MockCredentialHasher, MockTokenService, MockUserRepository};
use crate::domain::user::Role;

fn fixture_user(email: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: UserId::random(),
        email: email.to_owned(),
        full_name: "Mei Lin".to_owned(),
        password_hash: "$argon2id$fixture".to_owned(),
        role,
        created_at: now,
        updated_at: now,
    }
}

fn make_service(
    users: MockUserRepository,
    hasher: MockCredentialHasher,
    tokens: MockTokenService,
) -> IdentityService<MockUserRepository, MockCredentialHasher, MockTokenService> {
    IdentityService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
}

#[tokio::test]
async fn register_persists_hash_and_returns_user() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("ah.hock@example.test"))
        .times(1)
        .return_once(|_| Ok(None));
    users
        .expect_put()
        .withf(|user| user.password_hash == "$argon2id$hashed" && user.role == Role::Owner)
        .times(1)
        .return_once(|_| Ok(()));

    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_hash()
        .with(eq("s3cret"))
        .times(1)
        .return_once(|_| Ok("$argon2id$hashed".to_owned()));

    let service = make_service(users, hasher, MockTokenService::new());
    let user = service
        .register(RegisterUserRequest {
            email: "ah.hock@example.test".to_owned(),
            full_name: "Ah Hock".to_owned(),
            password: "s3cret".to_owned(),
            role: Role::Owner,
        })
        .await
        .expect("registration succeeds");

    assert_eq!(user.email, "ah.hock@example.test");
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(Some(fixture_user("taken@example.test", Role::Customer))));

    let service = make_service(users, MockCredentialHasher::new(), MockTokenService::new());
    let error = service
        .register(RegisterUserRequest {
            email: "taken@example.test".to_owned(),
            full_name: "Second Comer".to_owned(),
            password: "pw".to_owned(),
            role: Role::Customer,
        })
        .await
        .expect_err("duplicate email");

    assert_eq!(error.code(), ErrorCode::DuplicateEmail);
}

#[tokio::test]
async fn authenticate_returns_token_for_matching_credentials() {
    let user = fixture_user("jo@example.test", Role::Customer);
    let user_id = user.id;

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("jo@example.test"))
        .times(1)
        .return_once(move |_| Ok(Some(user)));

    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_verify()
        .with(eq("pw"), eq("$argon2id$fixture"))
        .times(1)
        .return_once(|_, _| Ok(true));

    let mut tokens = MockTokenService::new();
    tokens
        .expect_issue()
        .withf(move |subject, ttl| *subject == user_id && *ttl == Duration::days(7))
        .times(1)
        .return_once(|_, _| Ok("signed.token".to_owned()));

    let service = make_service(users, hasher, tokens);
    let token = service
        .authenticate("jo@example.test", "pw")
        .await
        .expect("authentication succeeds");
    assert_eq!(token, "signed.token");
}

#[tokio::test]
async fn unknown_email_and_wrong_password_fail_identically() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(None));
    let service = make_service(users, MockCredentialHasher::new(), MockTokenService::new());
    let unknown = service
        .authenticate("ghost@example.test", "pw")
        .await
        .expect_err("unknown email");

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(Some(fixture_user("jo@example.test", Role::Customer))));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_verify()
        .times(1)
        .return_once(|_, _| Ok(false));
    let service = make_service(users, hasher, MockTokenService::new());
    let wrong = service
        .authenticate("jo@example.test", "wrong")
        .await
        .expect_err("wrong password");

    assert_eq!(unknown.code(), ErrorCode::InvalidCredentials);
    assert_eq!(unknown.code(), wrong.code());
    assert_eq!(unknown.message(), wrong.message());
}

#[tokio::test]
async fn resolve_actor_returns_the_subject_user() {
    let user = fixture_user("jo@example.test", Role::Customer);
    let user_id = user.id;

    let mut tokens = MockTokenService::new();
    tokens
        .expect_verify()
        .with(eq("signed.token"))
        .times(1)
        .return_once(move |_| Ok(user_id));

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .times(1)
        .return_once(move |_| Ok(Some(user)));

    let service = make_service(users, MockCredentialHasher::new(), tokens);
    let actor = service
        .resolve_actor("signed.token")
        .await
        .expect("resolution succeeds");
    assert_eq!(actor.id, user_id);
}

#[tokio::test]
async fn resolve_actor_maps_token_failures_to_unauthenticated() {
    for failure in [
        TokenError::Expired,
        TokenError::Malformed {
            message: "not a jwt".to_owned(),
        },
        TokenError::BadSignature,
    ] {
        let mut tokens = MockTokenService::new();
        let returned = failure.clone();
        tokens
            .expect_verify()
            .times(1)
            .return_once(move |_| Err(returned));

        let service = make_service(MockUserRepository::new(), MockCredentialHasher::new(), tokens);
        let error = service
            .resolve_actor("whatever")
            .await
            .expect_err("token failure");
        assert_eq!(error.code(), ErrorCode::Unauthenticated, "{failure:?}");
    }
}

#[tokio::test]
async fn resolve_actor_rejects_vanished_subjects() {
    let subject = UserId::random();
    let mut tokens = MockTokenService::new();
    tokens
        .expect_verify()
        .times(1)
        .return_once(move |_| Ok(subject));

    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = make_service(users, MockCredentialHasher::new(), tokens);
    let error = service
        .resolve_actor("signed.token")
        .await
        .expect_err("vanished subject");
    assert_eq!(error.code(), ErrorCode::Unauthenticated);
}
