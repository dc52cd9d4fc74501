//! Server-specific constants
//!
//! Response texts of the HTTP boundary. Error texts raised by the flows live
//! in `tasker_domain::constants`.

/// Request header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

pub const USER_REGISTERED_MESSAGE: &str = "user registered successfully";

pub const USER_PROMOTED_MESSAGE: &str = "User promoted successfully";

pub const TASK_CREATED_MESSAGE: &str = "Task created successfully";

pub const TASK_UPDATED_MESSAGE: &str = "Task updated successfully";

pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully";

/// Body that could not be parsed as the expected JSON document
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON";

/// Only message ever shown for internal failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub const HEALTH_OK: &str = "ok";
