//! JSON error catchers
//!
//! Rocket answers guard failures and unmatched routes through catchers;
//! these keep the `{"message": ...}` body shape for those responses too.

use rocket::http::Status;
use rocket::request::Request;
use rocket::serde::json::Json;
use rocket::{Catcher, catch, catchers};

use crate::auth::GuardFailure;
use crate::constants::{INTERNAL_ERROR_MESSAGE, INVALID_JSON_MESSAGE};
use crate::models::MessageResponse;

/// Message recorded by a failing guard, else `fallback`
fn guard_message(request: &Request<'_>, fallback: &str) -> String {
    request
        .local_cache(|| GuardFailure(None))
        .0
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}

#[catch(400)]
fn bad_request() -> Json<MessageResponse> {
    Json(MessageResponse::new(INVALID_JSON_MESSAGE))
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> Json<MessageResponse> {
    Json(MessageResponse::new(guard_message(request, "Unauthorized")))
}

#[catch(403)]
fn forbidden(request: &Request<'_>) -> Json<MessageResponse> {
    Json(MessageResponse::new(guard_message(request, "Forbidden")))
}

#[catch(404)]
fn not_found() -> Json<MessageResponse> {
    Json(MessageResponse::new("Not found"))
}

#[catch(422)]
fn unprocessable() -> Json<MessageResponse> {
    Json(MessageResponse::new(INVALID_JSON_MESSAGE))
}

#[catch(500)]
fn internal_error() -> Json<MessageResponse> {
    Json(MessageResponse::new(INTERNAL_ERROR_MESSAGE))
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<MessageResponse>) {
    let reason = status.reason().unwrap_or("Unknown error");
    (status, Json(MessageResponse::new(reason)))
}

/// All catchers, for registration at `/`
pub fn all() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        forbidden,
        not_found,
        unprocessable,
        internal_error,
        default_catcher
    ]
}
