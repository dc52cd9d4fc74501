//! Domain Port Interfaces
//!
//! Contracts implemented by the infrastructure layer. Flows depend on these
//! traits only, so tests can substitute in-memory doubles.

pub mod crypto;

pub use crypto::{PasswordHasher, TokenService};
