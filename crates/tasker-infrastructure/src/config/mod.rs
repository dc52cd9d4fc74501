//! Configuration
//!
//! Sources are merged in this order, later ones winning:
//! defaults, a TOML file, then `TASKER__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
