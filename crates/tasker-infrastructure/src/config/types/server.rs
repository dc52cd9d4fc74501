//! Server configuration types

use crate::constants::{DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT};
use serde::{Deserialize, Serialize};

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Bind port; 0 is rejected at load time
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SERVER_ADDRESS.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}
