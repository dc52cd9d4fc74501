//! Domain Services
//!
//! Interfaces of the application services consumed by the HTTP layer.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`UserServiceInterface`] | Registration, login and promotion flows |
//! | [`TaskServiceInterface`] | Task CRUD |

/// Task service interface
pub mod tasks;
/// User account service interface
pub mod users;

pub use tasks::TaskServiceInterface;
pub use users::UserServiceInterface;
