//! # Tasker Domain Layer
//!
//! Core types and contracts for the task management API. This crate has no
//! knowledge of HTTP, configuration files or concrete storage engines.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `User`, `Role` and `Task` records |
//! | [`value_objects`] | Token claims and the per-request authorization context |
//! | [`ports`] | Credential hashing and token service contracts |
//! | [`repositories`] | User and task store contracts |
//! | [`error`] | Error taxonomy shared by every layer |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{NewTask, Role, Task, TaskUpdate, User};
pub use error::{Error, Result};
pub use value_objects::{AuthorizationContext, Claims};
