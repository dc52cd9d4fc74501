//! User Service Use Case
//!
//! Registration, authentication and promotion flows. Every step is a hard
//! gate: the first error is returned and no later step runs.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain_services::UserServiceInterface;
use crate::use_cases::deadline::with_deadline;
use tasker_domain::constants::{
    MAX_PASSWORD_BYTES, PASSWORD_TOO_LONG_MESSAGE, USER_EXISTS_MESSAGE,
};
use tasker_domain::entities::{Role, User};
use tasker_domain::error::{Error, Result};
use tasker_domain::ports::{PasswordHasher, TokenService};
use tasker_domain::repositories::UserRepository;

const CREDENTIALS_REQUIRED: &str = "username and password are required";

/// Message for lookup failures other than `NotFound` during registration
const USER_CHECK_FAILED: &str = "Error while checking user existence";

/// Message for lookup failures other than `NotFound` during login
const USER_LOOKUP_FAILED: &str = "Error while looking up user";

/// User service implementation
pub struct UserServiceImpl {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    store_timeout: Duration,
}

impl UserServiceImpl {
    /// Create new user service with injected dependencies
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            store_timeout,
        }
    }

    /// Store the new account, closing the bootstrap-admin race
    ///
    /// An admin candidate is inserted only while the store is empty. If
    /// another registration got there first the candidate is demoted and
    /// inserted as a regular user.
    async fn persist(&self, mut user: User) -> Result<User> {
        if user.role.is_admin() {
            let inserted = with_deadline(
                self.store_timeout,
                "create_if_empty",
                self.users.create_if_empty(&user),
            )
            .await?;
            if inserted {
                return Ok(user);
            }
            warn!(username = %user.username, "lost bootstrap race, registering as user");
            user.role = Role::User;
        }

        with_deadline(self.store_timeout, "create", self.users.create(&user)).await?;
        Ok(user)
    }
}

#[async_trait]
impl UserServiceInterface for UserServiceImpl {
    async fn register(&self, username: &str, password: &str) -> Result<User> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::validation(CREDENTIALS_REQUIRED));
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(Error::validation(PASSWORD_TOO_LONG_MESSAGE));
        }

        match with_deadline(
            self.store_timeout,
            "find_by_username",
            self.users.find_by_username(username),
        )
        .await
        {
            Ok(_) => return Err(Error::conflict(USER_EXISTS_MESSAGE)),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(Error::internal_with_source(USER_CHECK_FAILED, e)),
        }

        let existing = with_deadline(self.store_timeout, "count", self.users.count()).await?;
        let role = if existing == 0 { Role::Admin } else { Role::User };

        let password_hash = self.hasher.hash(password).await?;
        let user = self.persist(User::new(username, password_hash, role)).await?;

        info!(username = %user.username, role = %user.role, "user registered");
        Ok(user)
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::validation(CREDENTIALS_REQUIRED));
        }

        let user = match with_deadline(
            self.store_timeout,
            "find_by_username",
            self.users.find_by_username(username),
        )
        .await
        {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                info!("login rejected");
                return Err(Error::InvalidCredential);
            }
            Err(e) => return Err(Error::internal_with_source(USER_LOOKUP_FAILED, e)),
        };

        if let Err(e) = self.hasher.verify(&user.password_hash, password).await {
            if matches!(e, Error::InvalidCredential) {
                info!("login rejected");
            }
            return Err(e);
        }

        let token = self.tokens.issue(&user.id, &user.username, user.role)?;
        debug!(username = %user.username, "token issued");
        Ok(token)
    }

    async fn promote(&self, username: &str) -> Result<User> {
        if username.is_empty() {
            return Err(Error::validation("username is required"));
        }

        let mut user = with_deadline(
            self.store_timeout,
            "find_by_username",
            self.users.find_by_username(username),
        )
        .await?;

        user.promote();
        with_deadline(self.store_timeout, "update_by_id", self.users.update_by_id(&user)).await?;

        info!(username = %user.username, "user promoted to admin");
        Ok(user)
    }
}
