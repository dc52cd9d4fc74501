//! User directory contract

use async_trait::async_trait;

use crate::entities::User;
use crate::error::Result;

/// Durable store of users
///
/// Implementations are the authoritative guard of username uniqueness:
/// `create` must fail with `Conflict` when the username is taken, regardless
/// of any check the caller made beforehand.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn create(&self, user: &User) -> Result<()>;

    /// Insert `user` only if the store holds no users at all
    ///
    /// Returns `Ok(false)` without inserting when the store is not empty.
    /// The emptiness check and the insert are one atomic step.
    async fn create_if_empty(&self, user: &User) -> Result<bool>;

    /// Look a user up by exact username; `NotFound` when absent
    async fn find_by_username(&self, username: &str) -> Result<User>;

    /// Replace the stored user with the same id; `NotFound` when no record matched
    async fn update_by_id(&self, user: &User) -> Result<()>;

    /// Number of stored users
    async fn count(&self) -> Result<u64>;
}
