//! Task CRUD through the HTTP boundary

use rocket::http::{ContentType, Status};
use serde_json::{Value, json};

use crate::helpers::{bearer, get_json, login, message, post_json, seeded_client};

#[rocket::async_test]
async fn admin_manages_tasks_and_users_read_them() {
    let client = seeded_client().await;
    let alice = login(&client, "alice", "pw1").await;
    let bob = login(&client, "bob", "pw2").await;

    let (status, created) = post_json(
        &client,
        "/tasks",
        &json!({
            "title": "Write report",
            "description": "Quarterly numbers",
            "due_date": "2026-11-01",
            "status": "Pending"
        }),
        Some(&alice),
    )
    .await;
    assert_eq!(status, Status::Created);
    assert_eq!(message(&created), "Task created successfully");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = get_json(&client, "/tasks", Some(&bob)).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = client
        .put(format!("/tasks/{id}"))
        .header(ContentType::JSON)
        .header(bearer(&alice))
        .body(json!({"status": "Completed"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let (status, task) = get_json(&client, &format!("/tasks/{id}"), Some(&bob)).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(task["status"], "Completed");
    assert_eq!(task["title"], "Write report");

    let response = client
        .delete(format!("/tasks/{id}"))
        .header(bearer(&alice))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(message(&body), "Task deleted successfully");

    let (status, body) = get_json(&client, &format!("/tasks/{id}"), Some(&bob)).await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(message(&body), "Task not found");
}

#[rocket::async_test]
async fn regular_user_cannot_write_tasks() {
    let client = seeded_client().await;
    let bob = login(&client, "bob", "pw2").await;

    let (status, body) = post_json(&client, "/tasks", &json!({"title": "x"}), Some(&bob)).await;
    assert_eq!(status, Status::Forbidden);
    assert_eq!(message(&body), "Admins only");

    let response = client
        .delete("/tasks/anything")
        .header(bearer(&bob))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);
}

#[rocket::async_test]
async fn task_without_title_is_rejected() {
    let client = seeded_client().await;
    let alice = login(&client, "alice", "pw1").await;

    let (status, body) = post_json(
        &client,
        "/tasks",
        &json!({"description": "no title"}),
        Some(&alice),
    )
    .await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(message(&body), "title is required");
}

#[rocket::async_test]
async fn updating_missing_task_is_not_found() {
    let client = seeded_client().await;
    let alice = login(&client, "alice", "pw1").await;

    let response = client
        .put("/tasks/missing")
        .header(ContentType::JSON)
        .header(bearer(&alice))
        .body(json!({"title": "new"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}
