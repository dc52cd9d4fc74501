//! Domain constants
//!
//! Messages here are part of the public API contract and are matched by
//! clients; change them with care.

/// Token lifetime used when configuration does not override it (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

/// Returned for every structural, signature or expiry failure of a token
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Returned when the `Authorization` header is absent
pub const MISSING_AUTH_HEADER_MESSAGE: &str = "Authorization header required";

/// Returned when the `Authorization` header is not `Bearer <token>`
pub const BAD_AUTH_FORMAT_MESSAGE: &str = "Authorization format must be Bearer {token}";

/// Returned when a non-admin reaches an admin-only operation
pub const ADMINS_ONLY_MESSAGE: &str = "Admins only";

/// Returned on a duplicate registration
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// Resource label for missing users
pub const USER_NOT_FOUND: &str = "User not found";

/// Resource label for missing tasks
pub const TASK_NOT_FOUND: &str = "Task not found";

/// Longest password accepted, in bytes; bcrypt ignores anything past this
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Returned when a password exceeds [`MAX_PASSWORD_BYTES`]
pub const PASSWORD_TOO_LONG_MESSAGE: &str = "password must be at most 72 bytes";
