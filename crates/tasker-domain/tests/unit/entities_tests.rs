//! Tests for entities and value objects

use serde_json::json;
use tasker_domain::{AuthorizationContext, Claims, NewTask, Role, TaskUpdate, User};

#[test]
fn test_user_serialization_omits_password_hash() {
    let user = User::new("alice", "$2b$10$secret", Role::Admin);
    let value = serde_json::to_value(&user).expect("user serializes");

    assert_eq!(value["username"], "alice");
    assert_eq!(value["role"], "admin");
    assert!(value.get("password_hash").is_none());
}

#[test]
fn test_claims_wire_format() {
    let claims = Claims::new("id-1", "bob", Role::User, 100, 50);
    let value = serde_json::to_value(&claims).expect("claims serialize");

    assert_eq!(
        value,
        json!({"userId": "id-1", "username": "bob", "role": "user", "iat": 100, "exp": 150})
    );
}

#[test]
fn test_authorization_context_from_claims() {
    let claims = Claims::new("id-1", "bob", Role::Admin, 0, 10);
    let ctx = AuthorizationContext::from(claims);

    assert_eq!(ctx.user_id, "id-1");
    assert_eq!(ctx.username, "bob");
    assert!(ctx.role.is_admin());
}

#[test]
fn test_promote_sets_admin() {
    let mut user = User::new("bob", "hash", Role::User);
    user.promote();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn test_task_update_only_overwrites_non_empty_fields() {
    let mut task = NewTask {
        title: "Write report".to_string(),
        description: "Quarterly".to_string(),
        due_date: "2026-01-01".to_string(),
        status: "Pending".to_string(),
    }
    .into_task();

    TaskUpdate {
        status: "Completed".to_string(),
        ..TaskUpdate::default()
    }
    .apply_to(&mut task);

    assert_eq!(task.title, "Write report");
    assert_eq!(task.description, "Quarterly");
    assert_eq!(task.status, "Completed");
}
