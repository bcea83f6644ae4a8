//! Database connection pool management
//!
//! Uses a sqlx SqlitePool with a single long-lived connection. An in-memory
//! database exists only as long as a connection to it is open, so the one
//! connection never idles out or gets recycled.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default database: in-memory, gone when the process exits.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Maximum connections for the pool.
const MAX_CONNECTIONS: u32 = 1;

const SCHEMA: &str = include_str!("schema.sql");

/// Create a SQLite connection pool.
///
/// Accepts `sqlite::memory:` or `sqlite://path/to/file.db`. File databases are
/// created if missing. Foreign-key enforcement is switched off: references
/// between entities are declared in the schema but never checked.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the database cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite::memory:").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(MAX_CONNECTIONS)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Create the users, orders and offers tables if they do not exist.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::debug!("database schema ready");
    Ok(())
}

/// Open a fresh in-memory database with the schema applied (for tests).
pub async fn open_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(DEFAULT_DATABASE_URL).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
