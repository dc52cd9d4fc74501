//! Infrastructure layer constants

// Configuration discovery

/// Environment variable prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "TASKER";

/// Separator between the prefix and nested key segments
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file name searched in the default locations
pub const DEFAULT_CONFIG_FILENAME: &str = "tasker.toml";

/// Directory name used under the working and user config directories
pub const DEFAULT_CONFIG_DIR: &str = "tasker";

// Server

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";

pub const DEFAULT_SERVER_PORT: u16 = 8080;

// Authentication

/// Minimum accepted length of the token signing secret
pub const JWT_MIN_SECRET_LEN: usize = 32;

/// bcrypt cost factor used unless configured otherwise
pub const BCRYPT_DEFAULT_COST: u32 = 10;

pub const BCRYPT_MIN_COST: u32 = 4;

pub const BCRYPT_MAX_COST: u32 = 31;

// Store

/// Deadline applied to every store call
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// User database, relative to the working directory
pub const DEFAULT_USER_DATABASE_URL: &str = "sqlite://tasker.db";

pub const DEFAULT_STORE_MAX_CONNECTIONS: u32 = 5;

// Logging

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV_VAR: &str = "TASKER_LOG";

/// File name prefix for rotated log files when none can be derived
pub const DEFAULT_LOG_FILE_PREFIX: &str = "tasker";
