use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;

use super::{codec, pool, schema};
use crate::error::StoreError;
use crate::models::{NewUser, UserRecord, UserRow};

/// Usernames whose stored password contains both '_' (0x5F) and '@' (0x40)
const SELECT_FILTERED_USERNAMES: &str = "SELECT username FROM users \
     WHERE instr(password, X'5F') > 0 AND instr(password, X'40') > 0 \
     ORDER BY id";

/// Owner of the `users` table
///
/// Cloning is cheap and shares the underlying pool.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Open (or create) the database at `path` and make sure the schema exists
    pub async fn open(path: impl AsRef<Path>, idle_timeout: Duration) -> Result<Self, StoreError> {
        let pool = pool::create_pool(path, idle_timeout).await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if needed
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        schema::init_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Insert a new user and return its username
    ///
    /// Fails with [`StoreError::UserExists`] when the username is taken; the
    /// existing row is left untouched.
    pub async fn save_user(&self, user: &NewUser) -> Result<String, StoreError> {
        let press_times = codec::encode(&user.press_times)?;
        let interval_times = codec::encode(&user.interval_times)?;

        sqlx::query(
            "INSERT INTO users (username, password, press_times, interval_times) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(user.password.as_bytes())
        .bind(press_times)
        .bind(interval_times)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::UserExists
            }
            other => StoreError::Database(other),
        })?;

        tracing::debug!(username = %user.username, "user row inserted");

        Ok(user.username.clone())
    }

    /// Look up a user by exact username
    pub async fn get_user(&self, username: &str) -> Result<UserRecord, StoreError> {
        let row: UserRow = sqlx::query_as(
            "SELECT password, press_times, interval_times FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::UserNotFound)?;

        Ok(UserRecord::try_from(row)?)
    }

    /// Delete a user by exact username
    pub async fn delete_user(&self, username: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::UserNotFound);
        }

        tracing::debug!(username, "user row deleted");

        Ok(())
    }

    /// All usernames in insertion order
    pub async fn list_usernames(&self) -> Result<Vec<String>, StoreError> {
        let usernames = sqlx::query_scalar("SELECT username FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(usernames)
    }

    /// Comma-joined usernames whose password contains both `_` and `@`
    pub async fn list_usernames_filtered(&self) -> Result<String, StoreError> {
        let usernames: Vec<String> = sqlx::query_scalar(SELECT_FILTERED_USERNAMES)
            .fetch_all(&self.pool)
            .await?;

        Ok(usernames.join(","))
    }

    /// Check that a connection can be acquired and used
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
