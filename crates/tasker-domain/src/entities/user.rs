//! User accounts and roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Role assigned to a user, serialized as `user` / `admin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account
    #[default]
    User,
    /// Administrator: may promote users and mutate tasks
    Admin,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Whether this role grants administrative operations
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(Error::validation(format!("Unknown role: {other}"))),
        }
    }
}

/// User identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique opaque identifier
    pub id: String,
    /// Unique, case-sensitive login name
    pub username: String,
    /// Credential hash; never plaintext and never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role
    pub role: Role,
}

impl User {
    /// Create a user with a freshly generated identifier
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }

    /// Grant the admin role
    pub fn promote(&mut self) {
        self.role = Role::Admin;
    }
}
