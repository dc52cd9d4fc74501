//! Value objects
//!
//! Immutable values with no identity of their own.

pub mod claims;

pub use claims::{AuthorizationContext, Claims};
