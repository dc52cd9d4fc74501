//! Bearer token request guards
//!
//! [`AuthenticatedUser`] validates the `Authorization` header through the
//! authorization gate of the managed [`AppContext`]. [`AdminUser`] resolves
//! `AuthenticatedUser` first and only then checks the role, so a bad token
//! always yields 401 before any 403.
//!
//! Guard failures carry their message to the JSON catchers through the
//! request-local cache.
//!
//! ```rust,ignore
//! #[post("/promote", data = "<body>")]
//! async fn promote(admin: AdminUser, body: Json<PromoteRequest>) { ... }
//! ```

use rocket::http::Status;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use tracing::debug;

use crate::constants::AUTHORIZATION_HEADER;
use tasker_domain::error::Error;
use tasker_domain::value_objects::AuthorizationContext;
use tasker_infrastructure::AppContext;

/// Identity of a request that presented a valid token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthorizationContext);

/// Identity of a request whose token carries the admin role
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthorizationContext);

/// Message of the guard that rejected the current request, if any
#[derive(Debug, Clone, Default)]
pub struct GuardFailure(pub Option<String>);

/// Record the failure for the catcher and reject the request
fn reject<T>(request: &Request<'_>, status: Status, error: Error) -> request::Outcome<T, Error> {
    let message = match &error {
        Error::Unauthenticated { message } | Error::Forbidden { message } => message.clone(),
        other => other.to_string(),
    };
    debug!(%status, reason = %message, path = %request.uri(), "request rejected by guard");
    request.local_cache(|| GuardFailure(Some(message)));
    Outcome::Error((status, error))
}

fn app_context<'r>(request: &'r Request<'_>) -> Option<&'r AppContext> {
    request.rocket().state::<AppContext>()
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(context) = app_context(request) else {
            return reject(
                request,
                Status::InternalServerError,
                Error::internal("application context is not managed"),
            );
        };

        let header = request.headers().get_one(AUTHORIZATION_HEADER);
        match context.gate.authenticate(header) {
            Ok(identity) => Outcome::Success(AuthenticatedUser(identity)),
            Err(e) => reject(request, Status::Unauthorized, e),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminUser {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let AuthenticatedUser(identity) = try_outcome!(request.guard::<AuthenticatedUser>().await);

        let Some(context) = app_context(request) else {
            return reject(
                request,
                Status::InternalServerError,
                Error::internal("application context is not managed"),
            );
        };

        match context.gate.require_admin(Some(&identity)) {
            Ok(()) => Outcome::Success(AdminUser(identity)),
            Err(e) => reject(request, Status::Forbidden, e),
        }
    }
}
