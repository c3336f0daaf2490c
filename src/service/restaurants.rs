//! Restaurant queries and the cascading delete.

use crate::error::AppError;
use crate::models::{NewRestaurant, Restaurant, RestaurantWithMenu};
use crate::service::RestaurantPizzaService;
use crate::store;
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantService;

impl RestaurantService {
    /// All restaurants ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        tracing::debug!("list restaurants");
        let rows = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Restaurant plus its menu entries, each joined with its pizza.
    pub async fn get_detail(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<RestaurantWithMenu>, AppError> {
        tracing::debug!(id, "get restaurant");
        let mut conn = pool.acquire().await?;
        let Some(restaurant) = Self::find(&mut conn, id).await? else {
            return Ok(None);
        };
        let menu = RestaurantPizzaService::menu_for_restaurant(&mut conn, restaurant.id).await?;
        Ok(Some(RestaurantWithMenu { restaurant, menu }))
    }

    pub async fn create(
        conn: &mut SqliteConnection,
        new: &NewRestaurant,
    ) -> Result<Restaurant, AppError> {
        let row = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
        )
        .bind(&new.name)
        .bind(&new.address)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Delete the restaurant's menu entries, then the restaurant, in one transaction.
    /// Returns the number of menu entries removed, or `None` if no such restaurant exists.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<u64>, AppError> {
        let mut tx = store::begin_write(pool).await?;
        if Self::find(&mut tx, id).await?.is_none() {
            return Ok(None);
        }
        let removed = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id, menu_entries = removed, "restaurant deleted");
        Ok(Some(removed))
    }
}
