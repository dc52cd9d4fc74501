//! Authentication configuration types

use crate::constants::BCRYPT_DEFAULT_COST;
use serde::{Deserialize, Serialize};
use tasker_domain::constants::DEFAULT_TOKEN_TTL_SECS;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 signing secret
    ///
    /// **REQUIRED.** Configure via `TASKER__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file. Must be at least 32 characters.
    pub secret: String,

    /// Token lifetime in seconds
    pub expiration_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // Empty by default; the loader refuses to start without one
            secret: String::new(),
            expiration_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt: JwtConfig,

    #[serde(default)]
    pub password: PasswordConfig,
}
