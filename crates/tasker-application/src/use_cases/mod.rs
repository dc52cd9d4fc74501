//! Use Case Implementations
//!
//! | Use case | Interface |
//! |----------|-----------|
//! | [`UserServiceImpl`] | [`crate::UserServiceInterface`] |
//! | [`TaskServiceImpl`] | [`crate::TaskServiceInterface`] |
//! | [`AuthorizationGate`] | request authentication and admin checks |

pub mod authorization;
mod deadline;
pub mod task_service;
pub mod user_service;

pub use authorization::AuthorizationGate;
pub use task_service::TaskServiceImpl;
pub use user_service::UserServiceImpl;
