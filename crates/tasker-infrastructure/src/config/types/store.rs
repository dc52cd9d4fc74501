//! Store configuration types

use std::time::Duration;

use crate::constants::{
    DEFAULT_STORE_MAX_CONNECTIONS, DEFAULT_STORE_TIMEOUT_SECS, DEFAULT_USER_DATABASE_URL,
};
use serde::{Deserialize, Serialize};

/// Where the user directory keeps its records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite database file at `store.url`
    Sqlite,
    /// Process memory; every restart starts empty
    Memory,
}

/// Store access configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// User directory backend
    pub backend: StoreBackend,

    /// Database URL for the `sqlite` backend, e.g. `sqlite://tasker.db`
    pub url: String,

    /// Connection pool size for the `sqlite` backend
    pub max_connections: u32,

    /// Deadline for each individual store call, in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Sqlite,
            url: DEFAULT_USER_DATABASE_URL.to_string(),
            max_connections: DEFAULT_STORE_MAX_CONNECTIONS,
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}
