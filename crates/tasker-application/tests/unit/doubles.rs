//! In-memory doubles for the crypto ports and a few store failure modes

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tasker_domain::entities::{Role, User};
use tasker_domain::error::{Error, Result};
use tasker_domain::ports::{PasswordHasher, TokenService};
use tasker_domain::repositories::UserRepository;
use tasker_domain::value_objects::Claims;
use tasker_providers::InMemoryUserRepository;

/// Salted with a counter so equal inputs hash differently
#[derive(Default)]
pub struct FakeHasher {
    salt: AtomicU64,
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = self.salt.fetch_add(1, Ordering::SeqCst);
        Ok(format!("fake:{salt}:{plaintext}"))
    }

    async fn verify(&self, stored_hash: &str, candidate: &str) -> Result<()> {
        match stored_hash.splitn(3, ':').nth(2) {
            Some(plain) if plain == candidate => Ok(()),
            _ => Err(Error::InvalidCredential),
        }
    }
}

pub struct BrokenHasher;

#[async_trait]
impl PasswordHasher for BrokenHasher {
    async fn hash(&self, _plaintext: &str) -> Result<String> {
        Err(Error::internal("hashing failed"))
    }

    async fn verify(&self, _stored_hash: &str, _candidate: &str) -> Result<()> {
        Err(Error::internal("hashing failed"))
    }
}

/// Unsigned `id|username|role` tokens
pub struct FakeTokens;

impl TokenService for FakeTokens {
    fn issue(&self, user_id: &str, username: &str, role: Role) -> Result<String> {
        Ok(format!("{user_id}|{username}|{role}"))
    }

    fn validate(&self, token: &str) -> Result<Claims> {
        let parts: Vec<&str> = token.split('|').collect();
        let [user_id, username, role] = parts.as_slice() else {
            return Err(Error::invalid_token());
        };
        let role = role.parse::<Role>().map_err(|_| Error::invalid_token())?;
        Ok(Claims::new(*user_id, *username, role, 0, 60))
    }
}

/// Every call fails with an internal store error
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: &User) -> Result<()> {
        Err(Error::internal("store down"))
    }

    async fn create_if_empty(&self, _user: &User) -> Result<bool> {
        Err(Error::internal("store down"))
    }

    async fn find_by_username(&self, _username: &str) -> Result<User> {
        Err(Error::internal("store down"))
    }

    async fn update_by_id(&self, _user: &User) -> Result<()> {
        Err(Error::internal("store down"))
    }

    async fn count(&self) -> Result<u64> {
        Err(Error::internal("store down"))
    }
}

/// Lookups stall for `delay`, everything else delegates
pub struct SlowUserRepository {
    pub inner: InMemoryUserRepository,
    pub delay: Duration,
}

#[async_trait]
impl UserRepository for SlowUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        self.inner.create(user).await
    }

    async fn create_if_empty(&self, user: &User) -> Result<bool> {
        self.inner.create_if_empty(user).await
    }

    async fn find_by_username(&self, username: &str) -> Result<User> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_username(username).await
    }

    async fn update_by_id(&self, user: &User) -> Result<()> {
        self.inner.update_by_id(user).await
    }

    async fn count(&self) -> Result<u64> {
        self.inner.count().await
    }
}

pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn user_service(
    users: Arc<dyn UserRepository>,
) -> tasker_application::UserServiceImpl {
    tasker_application::UserServiceImpl::new(
        users,
        Arc::new(FakeHasher::default()),
        Arc::new(FakeTokens),
        STORE_TIMEOUT,
    )
}
