//! SQLite user directory
//!
//! Users live in a single `users` table whose `username` column carries a
//! UNIQUE constraint, so the database is the final judge of uniqueness.
//! The bootstrap insert is one `INSERT .. SELECT .. WHERE NOT EXISTS`
//! statement: SQLite takes the write lock before evaluating it, which makes
//! the emptiness check and the insert a single atomic step.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use tracing::{debug, info};

use tasker_domain::constants::{USER_EXISTS_MESSAGE, USER_NOT_FOUND};
use tasker_domain::entities::{Role, User};
use tasker_domain::error::{Error, Result};
use tasker_domain::repositories::UserRepository;

/// How long a connection waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY NOT NULL,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    role          TEXT NOT NULL
)";

const INSERT_USER: &str =
    "INSERT INTO users (id, username, password_hash, role) VALUES (?1, ?2, ?3, ?4)";

const INSERT_USER_IF_EMPTY: &str = "INSERT INTO users (id, username, password_hash, role)
    SELECT ?1, ?2, ?3, ?4 WHERE NOT EXISTS (SELECT 1 FROM users)";

const SELECT_USER_BY_USERNAME: &str =
    "SELECT id, username, password_hash, role FROM users WHERE username = ?1";

const UPDATE_USER_BY_ID: &str =
    "UPDATE users SET username = ?2, password_hash = ?3, role = ?4 WHERE id = ?1";

const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";

/// User directory persisted in a SQLite database file
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Open (creating if needed) the database at `url` and ensure the schema
    ///
    /// `url` takes the `sqlite://path/to/file.db` form.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| Error::configuration(format!("Invalid store URL {url}: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(store_error("Failed to open user database"))?;

        let repo = Self { pool };
        repo.migrate().await?;
        info!(url, max_connections, "user database ready");
        Ok(repo)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(store_error("Failed to create users table"))?;
        Ok(())
    }
}

fn store_error(context: &'static str) -> impl Fn(sqlx::Error) -> Error {
    move |err| Error::internal_with_source(format!("{context}: {err}"), err)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    let read = store_error("Failed to read user row");
    let role: String = row.try_get("role").map_err(&read)?;
    let role = Role::from_str(&role)
        .map_err(|_| Error::internal(format!("Stored role is invalid: {role}")))?;

    Ok(User {
        id: row.try_get("id").map_err(&read)?,
        username: row.try_get("username").map_err(&read)?,
        password_hash: row.try_get("password_hash").map_err(&read)?,
        role,
    })
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        sqlx::query(INSERT_USER)
            .bind(user.id.as_str())
            .bind(user.username.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::conflict(USER_EXISTS_MESSAGE)
                } else {
                    store_error("Failed to insert user")(e)
                }
            })?;
        debug!(user_id = %user.id, "user stored");
        Ok(())
    }

    async fn create_if_empty(&self, user: &User) -> Result<bool> {
        let result = sqlx::query(INSERT_USER_IF_EMPTY)
            .bind(user.id.as_str())
            .bind(user.username.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(store_error("Failed to insert bootstrap user"))?;

        let inserted = result.rows_affected() == 1;
        if inserted {
            debug!(user_id = %user.id, "bootstrap user stored");
        }
        Ok(inserted)
    }

    async fn find_by_username(&self, username: &str) -> Result<User> {
        let row = sqlx::query(SELECT_USER_BY_USERNAME)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("Failed to look up user"))?;

        match row {
            Some(row) => user_from_row(&row),
            None => Err(Error::not_found(USER_NOT_FOUND)),
        }
    }

    async fn update_by_id(&self, user: &User) -> Result<()> {
        let result = sqlx::query(UPDATE_USER_BY_ID)
            .bind(user.id.as_str())
            .bind(user.username.as_str())
            .bind(user.password_hash.as_str())
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::conflict(USER_EXISTS_MESSAGE)
                } else {
                    store_error("Failed to update user")(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_USERS)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("Failed to count users"))?;
        u64::try_from(count).map_err(|_| Error::internal(format!("Invalid user count: {count}")))
    }
}
