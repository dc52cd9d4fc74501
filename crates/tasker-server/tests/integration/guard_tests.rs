//! Bearer token guards and JSON catchers

use rocket::http::{Header, Status};
use serde_json::json;
use tasker_domain::entities::Role;
use tasker_infrastructure::crypto::JwtTokenService;

use crate::helpers::{SECRET, client, get_json, login, message, post_json, seeded_client};

#[rocket::async_test]
async fn missing_header_is_unauthorized() {
    let client = client().await;
    let (status, body) = get_json(&client, "/tasks", None).await;

    assert_eq!(status, Status::Unauthorized);
    assert_eq!(message(&body), "Authorization header required");
}

#[rocket::async_test]
async fn wrong_scheme_is_unauthorized() {
    let client = seeded_client().await;
    let token = login(&client, "alice", "pw1").await;

    for value in [format!("Token {token}"), token.clone(), format!("Bearer {token} x")] {
        let response = client
            .get("/tasks")
            .header(Header::new("Authorization", value))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
        let body: serde_json::Value = response.into_json().await.unwrap();
        assert_eq!(
            message(&body),
            "Authorization format must be Bearer {token}"
        );
    }
}

#[rocket::async_test]
async fn lowercase_scheme_is_accepted() {
    let client = seeded_client().await;
    let token = login(&client, "alice", "pw1").await;

    let response = client
        .get("/tasks")
        .header(Header::new("Authorization", format!("bearer {token}")))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn garbage_token_is_unauthorized() {
    let client = client().await;
    let (status, body) = get_json(&client, "/tasks", Some("not-a-token")).await;

    assert_eq!(status, Status::Unauthorized);
    assert_eq!(message(&body), "Invalid token");
}

#[rocket::async_test]
async fn expired_token_is_unauthorized() {
    let client = seeded_client().await;
    let expired = JwtTokenService::new(SECRET, 60)
        .issue_at("id", "alice", Role::Admin, 1_000)
        .unwrap();

    let (status, body) = get_json(&client, "/tasks", Some(&expired)).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(message(&body), "Invalid token");
}

#[rocket::async_test]
async fn foreign_secret_is_unauthorized() {
    let client = seeded_client().await;
    let forged = JwtTokenService::new("some-other-secret-0123456789abcdef", 3_600)
        .issue_at("id", "mallory", Role::Admin, 4_000_000_000 - 3_600)
        .unwrap();

    let (status, _) = get_json(&client, "/tasks", Some(&forged)).await;
    assert_eq!(status, Status::Unauthorized);
}

#[rocket::async_test]
async fn authentication_is_checked_before_admin_role() {
    let client = seeded_client().await;

    let (status, body) = post_json(&client, "/tasks", &json!({"title": "x"}), None).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(message(&body), "Authorization header required");

    let (status, body) =
        post_json(&client, "/tasks", &json!({"title": "x"}), Some("bogus")).await;
    assert_eq!(status, Status::Unauthorized);
    assert_eq!(message(&body), "Invalid token");
}

#[rocket::async_test]
async fn unknown_route_has_json_body() {
    let client = client().await;
    let (status, body) = get_json(&client, "/nowhere", None).await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(message(&body), "Not found");
}

#[rocket::async_test]
async fn health_is_public() {
    let client = client().await;
    let (status, body) = get_json(&client, "/health", None).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body, json!({"status": "ok"}));
}
