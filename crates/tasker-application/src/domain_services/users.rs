//! User account service interface

use async_trait::async_trait;
use tasker_domain::entities::User;
use tasker_domain::error::Result;

/// Registration, authentication and promotion flows
#[async_trait]
pub trait UserServiceInterface: Send + Sync {
    /// Register a new account
    ///
    /// The first account ever stored becomes an administrator, every later
    /// one a regular user. No token is issued.
    async fn register(&self, username: &str, password: &str) -> Result<User>;

    /// Check credentials and issue an identity token
    ///
    /// Unknown usernames and wrong passwords fail identically with
    /// `InvalidCredential`.
    async fn authenticate(&self, username: &str, password: &str) -> Result<String>;

    /// Grant the admin role to an existing user
    ///
    /// Callers must have passed the admin gate already. Tokens issued
    /// earlier keep their old role claim until they expire.
    async fn promote(&self, username: &str) -> Result<User>;
}
