use sqlx::SqlitePool;

/// Users table: one row per user, timing sequences stored as codec blobs
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password BLOB NOT NULL,
    press_times BLOB NOT NULL,
    interval_times BLOB NOT NULL
)";

/// Secondary index on username for lookups and deletes
pub const CREATE_USERNAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS users_username_idx ON users (username)";

/// Create the schema if it does not exist yet
///
/// Safe to run on every startup. There is no versioning; an existing table
/// is left as is.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_USERNAME_INDEX).execute(pool).await?;

    tracing::info!("Database schema initialized");

    Ok(())
}
