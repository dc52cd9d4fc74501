//! Mapping from domain errors to HTTP responses

use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::{self, Json};
use tracing::{debug, error};

use crate::constants::{INTERNAL_ERROR_MESSAGE, INVALID_JSON_MESSAGE};
use crate::models::MessageResponse;
use tasker_domain::error::Error;

/// Result type of every route handler
pub type ApiResult<T> = Result<T, ApiError>;

/// Domain error on its way out as `{"message": ...}` with the matching status
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// Status code and client-facing message for the wrapped error
    ///
    /// Internal details are logged here and never sent to the client.
    pub fn status_and_message(&self) -> (Status, String) {
        match &self.0 {
            Error::Unauthenticated { message } => (Status::Unauthorized, message.clone()),
            Error::InvalidCredential => (Status::Unauthorized, self.0.to_string()),
            Error::Forbidden { message } => (Status::Forbidden, message.clone()),
            Error::Conflict { message } => (Status::Conflict, message.clone()),
            Error::NotFound { resource } => (Status::NotFound, resource.clone()),
            Error::Validation { message } => (Status::BadRequest, message.clone()),
            Error::Internal { .. } | Error::Configuration { .. } => {
                error!(error = %self.0, source = ?std::error::Error::source(&self.0), "request failed");
                (Status::InternalServerError, INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let (status, message) = self.status_and_message();
        (status, Json(MessageResponse::new(message))).respond_to(request)
    }
}

/// Unwrap a fallible JSON body, answering 400 "Invalid JSON" on failure
pub fn parse_body<T>(body: Result<Json<T>, json::Error<'_>>) -> ApiResult<T> {
    body.map(Json::into_inner).map_err(|e| {
        debug!(error = ?e, "rejected request body");
        ApiError(Error::validation(INVALID_JSON_MESSAGE))
    })
}
