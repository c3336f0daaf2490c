//! Database helpers shared by the unit tests.

use crate::migration::apply_migrations;
use crate::store::connect_url;
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
pub async fn memory_pool() -> SqlitePool {
    let pool = connect_url("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}
