//! Tests for the registration, login and promotion flows

use std::sync::Arc;
use std::time::Duration;

use tasker_application::{UserServiceImpl, UserServiceInterface};
use tasker_domain::entities::Role;
use tasker_domain::error::Error;
use tasker_domain::ports::TokenService;
use tasker_domain::repositories::UserRepository;
use tasker_providers::InMemoryUserRepository;

use crate::doubles::{
    BrokenHasher, FailingUserRepository, FakeTokens, SlowUserRepository, STORE_TIMEOUT,
    user_service,
};

fn setup() -> (Arc<InMemoryUserRepository>, UserServiceImpl) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let service = user_service(repo.clone());
    (repo, service)
}

#[tokio::test]
async fn first_registrant_is_admin_second_is_user() {
    let (_, service) = setup();

    let alice = service.register("alice", "pw1").await.unwrap();
    let bob = service.register("bob", "pw2").await.unwrap();

    assert_eq!(alice.role, Role::Admin);
    assert_eq!(bob.role, Role::User);
}

#[tokio::test]
async fn stored_hash_is_never_the_plaintext() {
    let (repo, service) = setup();
    service.register("alice", "pw1").await.unwrap();

    let stored = repo.find_by_username("alice").await.unwrap();
    assert_ne!(stored.password_hash, "pw1");
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let (repo, service) = setup();
    service.register("alice", "pw1").await.unwrap();

    let err = service.register("alice", "anything").await.unwrap_err();
    assert!(matches!(err, Error::Conflict { ref message } if message == "User already exists"));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn empty_credentials_are_rejected() {
    let (repo, service) = setup();

    assert!(matches!(
        service.register("", "pw").await.unwrap_err(),
        Error::Validation { .. }
    ));
    assert!(matches!(
        service.register("alice", "").await.unwrap_err(),
        Error::Validation { .. }
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn password_longer_than_72_bytes_is_rejected() {
    let (repo, service) = setup();

    let err = service
        .register("alice", &"p".repeat(73))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(repo.count().await.unwrap(), 0);

    service.register("alice", &"p".repeat(72)).await.unwrap();
}

#[tokio::test]
async fn lookup_failure_during_registration_is_internal() {
    let service = user_service(Arc::new(FailingUserRepository));

    let err = service.register("alice", "pw1").await.unwrap_err();
    assert!(
        matches!(err, Error::Internal { ref message, .. } if message == "Error while checking user existence")
    );
}

#[tokio::test]
async fn hashing_failure_stops_registration() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let service = UserServiceImpl::new(
        repo.clone(),
        Arc::new(BrokenHasher),
        Arc::new(FakeTokens),
        STORE_TIMEOUT,
    );

    let err = service.register("alice", "pw1").await.unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_produce_exactly_one_admin() {
    let (repo, service) = setup();
    let service = Arc::new(service);

    let attempts = (0..12).map(|i| {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.register(&format!("user{i}"), "pw").await })
    });
    let users: Vec<_> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    let admins = users.iter().filter(|u| u.role.is_admin()).count();
    assert_eq!(admins, 1);
    assert_eq!(repo.count().await.unwrap(), 12);
}

#[tokio::test]
async fn register_then_login_yields_matching_claims() {
    let (_, service) = setup();
    service.register("alice", "pw1").await.unwrap();

    let token = service.authenticate("alice", "pw1").await.unwrap();
    let claims = FakeTokens.validate(&token).unwrap();

    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, Role::Admin);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_fail_identically() {
    let (_, service) = setup();
    service.register("alice", "pw1").await.unwrap();

    let unknown = service.authenticate("mallory", "pw1").await.unwrap_err();
    let wrong = service.authenticate("alice", "nope").await.unwrap_err();

    assert!(matches!(unknown, Error::InvalidCredential));
    assert!(matches!(wrong, Error::InvalidCredential));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn login_and_promotion_require_their_fields() {
    let (_, service) = setup();
    service.register("alice", "pw1").await.unwrap();

    for (username, password) in [("", "pw1"), ("alice", "")] {
        let err = service.authenticate(username, password).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
    assert!(matches!(
        service.promote("").await.unwrap_err(),
        Error::Validation { .. }
    ));
}

#[tokio::test]
async fn lookup_failure_during_login_is_internal() {
    let service = user_service(Arc::new(FailingUserRepository));
    let err = service.authenticate("alice", "pw1").await.unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
}

#[tokio::test]
async fn promotion_updates_role_and_later_logins() {
    let (repo, service) = setup();
    service.register("alice", "pw1").await.unwrap();
    service.register("bob", "pw2").await.unwrap();
    let stale = service.authenticate("bob", "pw2").await.unwrap();

    let promoted = service.promote("bob").await.unwrap();
    assert_eq!(promoted.role, Role::Admin);
    assert_eq!(
        repo.find_by_username("bob").await.unwrap().role,
        Role::Admin
    );

    let fresh = service.authenticate("bob", "pw2").await.unwrap();
    assert_eq!(FakeTokens.validate(&fresh).unwrap().role, Role::Admin);
    assert_eq!(FakeTokens.validate(&stale).unwrap().role, Role::User);
}

#[tokio::test]
async fn promoting_unknown_user_is_not_found_and_changes_nothing() {
    let (repo, service) = setup();
    service.register("alice", "pw1").await.unwrap();

    let err = service.promote("ghost").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(
        repo.find_by_username("alice").await.unwrap().role,
        Role::Admin
    );
}

#[tokio::test(start_paused = true)]
async fn stalled_store_call_fails_with_internal() {
    let repo = Arc::new(SlowUserRepository {
        inner: InMemoryUserRepository::new(),
        delay: STORE_TIMEOUT + Duration::from_secs(1),
    });
    let service = user_service(repo);

    let err = service.promote("bob").await.unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
}
