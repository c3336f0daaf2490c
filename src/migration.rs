//! Schema setup: tables, constraints and indexes, applied in dependency order.
//! Every statement is idempotent so this runs on each startup.

use crate::error::AppError;
use crate::models::Price;
use crate::store;
use sqlx::SqlitePool;

/// Tables the service reads and writes.
pub const TABLES: [&str; 3] = ["restaurants", "pizzas", "restaurant_pizzas"];

fn statements() -> Vec<String> {
    vec![
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#
        .to_string(),
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#
        .to_string(),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS restaurant_pizzas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                price INTEGER NOT NULL CHECK (price BETWEEN {} AND {}),
                restaurant_id INTEGER NOT NULL
                    CONSTRAINT fk_restaurant_pizzas_restaurant_id_restaurants REFERENCES restaurants (id),
                pizza_id INTEGER NOT NULL
                    CONSTRAINT fk_restaurant_pizzas_pizza_id_pizzas REFERENCES pizzas (id)
            )
            "#,
            Price::MIN,
            Price::MAX
        ),
        "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)"
            .to_string(),
        "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)"
            .to_string(),
    ]
}

/// Create all tables and indexes that do not exist yet, in one transaction.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = store::begin_write(pool).await?;
    for sql in statements() {
        sqlx::query(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema up to date");
    Ok(())
}

/// Names from [`TABLES`] that are not present in the database.
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, sqlx::Error> {
    let present: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;
    Ok(TABLES
        .into_iter()
        .filter(|table| !present.iter().any(|name| name.as_str() == *table))
        .collect())
}
