//! Request authentication and admin authorization

use std::sync::Arc;

use tracing::debug;

use tasker_domain::constants::{
    ADMINS_ONLY_MESSAGE, BAD_AUTH_FORMAT_MESSAGE, MISSING_AUTH_HEADER_MESSAGE,
};
use tasker_domain::error::{Error, Result};
use tasker_domain::ports::TokenService;
use tasker_domain::value_objects::AuthorizationContext;

/// Expected scheme of the `Authorization` header
const BEARER_SCHEME: &str = "Bearer";

/// Turns a raw `Authorization` header into an identity, and an identity into
/// an admin decision
///
/// `authenticate` must succeed before `require_admin` is consulted.
#[derive(Clone)]
pub struct AuthorizationGate {
    tokens: Arc<dyn TokenService>,
}

impl AuthorizationGate {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    /// Validate a `Bearer <token>` header value
    ///
    /// An empty header counts as missing. The value must be exactly two
    /// space-separated parts; the scheme matches `Bearer` in any case.
    pub fn authenticate(&self, header: Option<&str>) -> Result<AuthorizationContext> {
        let header = header
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::unauthenticated(MISSING_AUTH_HEADER_MESSAGE))?;

        let parts: Vec<&str> = header.split(' ').collect();
        let [scheme, token] = parts.as_slice() else {
            return Err(Error::unauthenticated(BAD_AUTH_FORMAT_MESSAGE));
        };
        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return Err(Error::unauthenticated(BAD_AUTH_FORMAT_MESSAGE));
        }

        let claims = self.tokens.validate(token).inspect_err(|_| {
            debug!("bearer token rejected");
        })?;
        Ok(AuthorizationContext::from(claims))
    }

    /// Pass only when an admin identity is present
    pub fn require_admin(&self, context: Option<&AuthorizationContext>) -> Result<()> {
        match context {
            Some(ctx) if ctx.role.is_admin() => Ok(()),
            _ => Err(Error::forbidden(ADMINS_ONLY_MESSAGE)),
        }
    }
}
