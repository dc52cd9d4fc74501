//! Application Layer - Tasker
//!
//! Use cases for the task management API. Flows orchestrate domain entities
//! through the ports declared in `tasker-domain` and never touch HTTP,
//! configuration files or concrete stores.
//!
//! ## Use Cases
//!
//! - Registration, with the first account becoming administrator
//! - Login, issuing a signed identity token
//! - Promotion of an existing user to administrator
//! - Bearer-token authentication and admin authorization
//! - Task CRUD
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tasker-domain`: entities, ports and repository traits
//! - `tokio` for store-call deadlines

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
