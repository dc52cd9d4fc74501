//! Repository Interfaces
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`UserRepository`] | Durable user directory keyed by unique username |
//! | [`TaskRepository`] | Plain CRUD over tasks |

pub mod task_repository;
pub mod user_repository;

pub use task_repository::TaskRepository;
pub use user_repository::UserRepository;
