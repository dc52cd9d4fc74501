//! In-memory user directory
//!
//! Users are indexed by username, which makes the map key the unique index.
//! All mutations take the write lock for a single synchronous map operation,
//! so uniqueness and the insert-if-empty rule hold under concurrent callers.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use tasker_domain::constants::{USER_EXISTS_MESSAGE, USER_NOT_FOUND};
use tasker_domain::entities::User;
use tasker_domain::error::{Error, Result};
use tasker_domain::repositories::UserRepository;

/// In-memory user directory keyed by username
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }
        users.insert(user.username.clone(), user.clone());
        debug!(user_id = %user.id, "user stored");
        Ok(())
    }

    async fn create_if_empty(&self, user: &User) -> Result<bool> {
        let mut users = self.users.write().await;
        if !users.is_empty() {
            return Ok(false);
        }
        users.insert(user.username.clone(), user.clone());
        debug!(user_id = %user.id, "bootstrap user stored");
        Ok(true)
    }

    async fn find_by_username(&self, username: &str) -> Result<User> {
        self.users
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    async fn update_by_id(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        let current_key = users
            .iter()
            .find(|(_, stored)| stored.id == user.id)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;

        if current_key != user.username {
            if users.contains_key(&user.username) {
                return Err(Error::conflict(USER_EXISTS_MESSAGE));
            }
            users.remove(&current_key);
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}
