//! # Tasker - Store Implementations
//!
//! Adapters implementing the repository ports declared in `tasker-domain`.
//!
//! | Port | Implementation |
//! |------|----------------|
//! | `UserRepository` | [`SqliteUserRepository`], [`InMemoryUserRepository`] |
//! | `TaskRepository` | [`InMemoryTaskRepository`] |
//!
//! The SQLite directory survives restarts; the in-memory stores live for
//! the lifetime of the process.

// Re-export domain types commonly used with providers
pub use tasker_domain::error::{Error, Result};
pub use tasker_domain::repositories::{TaskRepository, UserRepository};

/// Task store implementations
pub mod task_store;

/// User directory implementations
pub mod user_store;

/// Durable user directory
pub mod sqlite_user_store;

pub use task_store::InMemoryTaskRepository;
pub use sqlite_user_store::SqliteUserRepository;
pub use user_store::InMemoryUserRepository;
