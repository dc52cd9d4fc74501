//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Body of `/register` and `/login`
///
/// Both fields are required; a body missing either fails to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `/promote`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromoteRequest {
    pub username: String,
}

/// `{"message": "..."}`, used for confirmations and every error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Successful task creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreatedResponse {
    pub message: String,
    /// Identifier assigned to the new task
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
