//! # Tasker - Infrastructure Layer
//!
//! Cross-cutting technical concerns that sit behind the domain ports.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`crypto`] | bcrypt password hashing and HS256 identity tokens |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`bootstrap`] | Wiring of stores, crypto and use cases into an [`AppContext`] |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;
pub mod utils;

pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
