use crate::error::AppError;
use crate::models::{NewPizza, Pizza};
use crate::store;
use sqlx::{SqliteConnection, SqlitePool};

pub struct PizzaService;

impl PizzaService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        tracing::debug!("list pizzas");
        let rows = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Pizza>, AppError> {
        let row = sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn create(conn: &mut SqliteConnection, new: &NewPizza) -> Result<Pizza, AppError> {
        let row = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
        )
        .bind(&new.name)
        .bind(&new.ingredients)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Same contract as `RestaurantService::delete`: menu entries first, then the pizza.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<u64>, AppError> {
        let mut tx = store::begin_write(pool).await?;
        if Self::find(&mut tx, id).await?.is_none() {
            return Ok(None);
        }
        let removed = sqlx::query("DELETE FROM restaurant_pizzas WHERE pizza_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM pizzas WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id, menu_entries = removed, "pizza deleted");
        Ok(Some(removed))
    }
}
