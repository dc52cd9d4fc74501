//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, LoggingConfig, ServerConfig, StoreConfig};

/// Root configuration, built once at startup and passed down by reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Token signing and password hashing
    #[serde(default)]
    pub auth: AuthConfig,
    /// Store call deadlines
    #[serde(default)]
    pub store: StoreConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}
