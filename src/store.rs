//! Connection pool setup for the SQLite database named by `DB_URI`.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;
use std::str::FromStr;

/// Open a pool for `settings.database_url`, creating the database file if missing.
/// Foreign keys are always enforced.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    connect_url(&settings.database_url, settings.max_connections).await
}

pub async fn connect_url(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Every connection to `:memory:` is its own database, so keep exactly one alive forever.
    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?
    };
    tracing::debug!(database_url = %database_url, "database pool ready");
    Ok(pool)
}

/// Begin a transaction holding the write lock from its first statement. A deferred
/// transaction that reads and then writes fails with `SQLITE_BUSY` if another connection
/// wrote in between; an immediate one waits on the busy timeout instead.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
