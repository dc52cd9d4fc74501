//! Task endpoints
//!
//! Reads need any valid token; writes need the admin role.

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{State, delete, get, post, put};

use crate::auth::{AdminUser, AuthenticatedUser};
use crate::constants::{TASK_CREATED_MESSAGE, TASK_DELETED_MESSAGE, TASK_UPDATED_MESSAGE};
use crate::error::{ApiResult, parse_body};
use crate::models::{MessageResponse, TaskCreatedResponse};
use tasker_domain::entities::{NewTask, Task, TaskUpdate};
use tasker_infrastructure::AppContext;

#[get("/tasks")]
pub async fn list_tasks(
    _user: AuthenticatedUser,
    ctx: &State<AppContext>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(ctx.tasks.list().await?))
}

#[get("/tasks/<id>")]
pub async fn get_task(
    _user: AuthenticatedUser,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<Task>> {
    Ok(Json(ctx.tasks.get(id).await?))
}

#[post("/tasks", data = "<body>")]
pub async fn create_task(
    _admin: AdminUser,
    ctx: &State<AppContext>,
    body: Result<Json<NewTask>, json::Error<'_>>,
) -> ApiResult<(Status, Json<TaskCreatedResponse>)> {
    let task = ctx.tasks.create(parse_body(body)?).await?;
    Ok((
        Status::Created,
        Json(TaskCreatedResponse {
            message: TASK_CREATED_MESSAGE.to_string(),
            id: task.id,
        }),
    ))
}

#[put("/tasks/<id>", data = "<body>")]
pub async fn update_task(
    _admin: AdminUser,
    ctx: &State<AppContext>,
    id: &str,
    body: Result<Json<TaskUpdate>, json::Error<'_>>,
) -> ApiResult<Json<MessageResponse>> {
    ctx.tasks.update(id, parse_body(body)?).await?;
    Ok(Json(MessageResponse::new(TASK_UPDATED_MESSAGE)))
}

#[delete("/tasks/<id>")]
pub async fn delete_task(
    _admin: AdminUser,
    ctx: &State<AppContext>,
    id: &str,
) -> ApiResult<Json<MessageResponse>> {
    ctx.tasks.delete(id).await?;
    Ok(Json(MessageResponse::new(TASK_DELETED_MESSAGE)))
}
