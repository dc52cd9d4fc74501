//! Token claims and the per-request authorization context

use serde::{Deserialize, Serialize};

use crate::entities::Role;

/// Claims carried by an identity token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Subject username
    pub username: String,
    /// Role at issue time; not refreshed when the user is promoted
    pub role: Role,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expiration (Unix seconds); valid while `now < exp`
    pub exp: u64,
}

impl Claims {
    /// Build claims issued at `now` and valid for `ttl_secs`
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        role: Role,
        now: u64,
        ttl_secs: u64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            role,
            iat: now,
            exp: now.saturating_add(ttl_secs),
        }
    }

    /// Whether the claims are expired at `now`
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.exp
    }
}

/// Identity attached to a request after its token has been validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationContext {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

impl From<Claims> for AuthorizationContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}
