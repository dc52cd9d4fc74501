//! Password hashing service using bcrypt

use async_trait::async_trait;
use tracing::debug;

use crate::constants::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use crate::error_ext::ErrorContext;
use tasker_domain::constants::{MAX_PASSWORD_BYTES, PASSWORD_TOO_LONG_MESSAGE};
use tasker_domain::error::{Error, Result};
use tasker_domain::ports::PasswordHasher;

/// Salted bcrypt hashing with a fixed cost factor
///
/// Hashing is CPU-bound and runs on the blocking thread pool. bcrypt only
/// reads the first 72 bytes of its input, so longer passwords are refused
/// instead of being silently truncated.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher; `cost` must lie in 4..=31
    pub fn new(cost: u32) -> Result<Self> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
            return Err(Error::configuration(format!(
                "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(Error::validation(PASSWORD_TOO_LONG_MESSAGE));
        }
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .context("Password hashing task failed")?
            .context("Password hashing failed")
    }

    async fn verify(&self, stored_hash: &str, candidate: &str) -> Result<()> {
        // Could never have been stored; a truncating compare would accept it
        if candidate.len() > MAX_PASSWORD_BYTES {
            return Err(Error::InvalidCredential);
        }
        let stored_hash = stored_hash.to_owned();
        let candidate = candidate.to_owned();
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &stored_hash))
            .await
            .context("Password verification task failed")?;

        match outcome {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::InvalidCredential),
            Err(e) => {
                debug!(error = %e, "stored hash could not be read");
                Err(Error::InvalidCredential)
            }
        }
    }
}
