//! Cryptographic services module
//!
//! - bcrypt password hashing behind [`tasker_domain::ports::PasswordHasher`]
//! - HS256 identity tokens behind [`tasker_domain::ports::TokenService`]

mod password;
mod token;

pub use password::BcryptPasswordHasher;
pub use token::JwtTokenService;
