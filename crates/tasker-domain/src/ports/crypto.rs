//! Credential hashing and token service ports

use async_trait::async_trait;

use crate::entities::Role;
use crate::error::Result;
use crate::value_objects::Claims;

/// One-way salted credential hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password; repeated calls yield different outputs
    async fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check `candidate` against `stored_hash`
    ///
    /// Fails with [`crate::Error::InvalidCredential`] on mismatch or on an
    /// unreadable hash.
    async fn verify(&self, stored_hash: &str, candidate: &str) -> Result<()>;
}

/// Issues and validates signed, time-limited identity tokens
pub trait TokenService: Send + Sync {
    /// Issue a token for the given identity
    fn issue(&self, user_id: &str, username: &str, role: Role) -> Result<String>;

    /// Validate a token and return its claims
    ///
    /// Every failure is reported as the same `Unauthenticated` error.
    fn validate(&self, token: &str) -> Result<Claims>;
}
