//! Registration, login and promotion endpoints

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{State, post};
use tracing::info;

use crate::auth::AdminUser;
use crate::constants::{USER_PROMOTED_MESSAGE, USER_REGISTERED_MESSAGE};
use crate::error::{ApiResult, parse_body};
use crate::models::{Credentials, MessageResponse, PromoteRequest, TokenResponse};
use tasker_infrastructure::AppContext;

/// Create an account; the very first account becomes admin
///
/// No token is issued here; clients log in separately.
#[post("/register", data = "<body>")]
pub async fn register(
    ctx: &State<AppContext>,
    body: Result<Json<Credentials>, json::Error<'_>>,
) -> ApiResult<(Status, Json<MessageResponse>)> {
    let credentials = parse_body(body)?;
    ctx.users
        .register(&credentials.username, &credentials.password)
        .await?;
    Ok((
        Status::Created,
        Json(MessageResponse::new(USER_REGISTERED_MESSAGE)),
    ))
}

#[post("/login", data = "<body>")]
pub async fn login(
    ctx: &State<AppContext>,
    body: Result<Json<Credentials>, json::Error<'_>>,
) -> ApiResult<Json<TokenResponse>> {
    let credentials = parse_body(body)?;
    let token = ctx
        .users
        .authenticate(&credentials.username, &credentials.password)
        .await?;
    Ok(Json(TokenResponse { token }))
}

/// Grant the admin role to another user (admin only)
#[post("/promote", data = "<body>")]
pub async fn promote(
    admin: AdminUser,
    ctx: &State<AppContext>,
    body: Result<Json<PromoteRequest>, json::Error<'_>>,
) -> ApiResult<Json<MessageResponse>> {
    let request = parse_body(body)?;
    let promoted = ctx.users.promote(&request.username).await?;
    info!(by = %admin.0.username, target = %promoted.username, "promotion granted");
    Ok(Json(MessageResponse::new(USER_PROMOTED_MESSAGE)))
}
