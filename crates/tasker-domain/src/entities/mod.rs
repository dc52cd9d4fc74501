//! Domain entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`User`] | Registered account with a credential hash and a [`Role`] |
//! | [`Task`] | Unit of work managed through the task endpoints |

pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskUpdate};
pub use user::{Role, User};
