//! HS256 identity tokens

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use crate::config::JwtConfig;
use crate::error_ext::ErrorContext;
use crate::utils::now_unix_secs;
use tasker_domain::entities::Role;
use tasker_domain::error::{Error, Result};
use tasker_domain::ports::TokenService;
use tasker_domain::value_objects::Claims;

/// Signs and validates `{userId, username, role, iat, exp}` tokens
///
/// Only HS256 is accepted when validating. A token is valid while
/// `now < exp`, with no leeway.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `validate_at`
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expiration_secs)
    }

    /// Issue a token as if the current time were `now` (Unix seconds)
    pub fn issue_at(&self, user_id: &str, username: &str, role: Role, now: u64) -> Result<String> {
        let claims = Claims::new(user_id, username, role, now, self.ttl_secs);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Token signing failed")
    }

    /// Validate a token as if the current time were `now` (Unix seconds)
    pub fn validate_at(&self, token: &str, now: u64) -> Result<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "token rejected");
                Error::invalid_token()
            })?
            .claims;

        if claims.is_expired_at(now) {
            debug!(exp = claims.exp, now, "token expired");
            return Err(Error::invalid_token());
        }
        Ok(claims)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &str, username: &str, role: Role) -> Result<String> {
        self.issue_at(user_id, username, role, now_unix_secs())
    }

    fn validate(&self, token: &str) -> Result<Claims> {
        self.validate_at(token, now_unix_secs())
    }
}
