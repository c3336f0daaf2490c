//! The priced association between restaurants and pizzas.

use crate::error::{AppError, INVALID_REFERENCE_MESSAGE};
use crate::models::{MenuEntry, NewRestaurantPizza, Pizza, RestaurantPizza, RestaurantPizzaDetail};
use crate::service::{PizzaService, RestaurantService};
use crate::store;
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantPizzaService;

#[derive(sqlx::FromRow)]
struct MenuRow {
    id: i64,
    price: i64,
    restaurant_id: i64,
    pizza_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<MenuRow> for MenuEntry {
    fn from(row: MenuRow) -> Self {
        MenuEntry {
            restaurant_pizza: RestaurantPizza {
                id: row.id,
                price: row.price,
                restaurant_id: row.restaurant_id,
                pizza_id: row.pizza_id,
            },
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

impl RestaurantPizzaService {
    /// Check that both referenced rows exist, then insert, all in one transaction.
    /// A missing pizza or restaurant is a validation error, not a lookup miss.
    pub async fn create(
        pool: &SqlitePool,
        new: &NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, AppError> {
        let mut tx = store::begin_write(pool).await?;
        let pizza = PizzaService::find(&mut tx, new.pizza_id).await?;
        let restaurant = RestaurantService::find(&mut tx, new.restaurant_id).await?;
        let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
            tracing::debug!(
                pizza_id = new.pizza_id,
                restaurant_id = new.restaurant_id,
                "unknown reference"
            );
            return Err(AppError::validation(INVALID_REFERENCE_MESSAGE));
        };
        let restaurant_pizza = Self::insert(&mut tx, new).await?;
        tx.commit().await?;
        tracing::info!(
            id = restaurant_pizza.id,
            restaurant_id = restaurant.id,
            pizza_id = pizza.id,
            price = restaurant_pizza.price,
            "restaurant pizza created"
        );
        Ok(RestaurantPizzaDetail {
            restaurant_pizza,
            pizza,
            restaurant,
        })
    }

    /// Plain insert with no existence checks beyond the foreign keys.
    pub async fn insert(
        conn: &mut SqliteConnection,
        new: &NewRestaurantPizza,
    ) -> Result<RestaurantPizza, AppError> {
        let row = sqlx::query_as::<_, RestaurantPizza>(
            "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?) \
             RETURNING id, price, restaurant_id, pizza_id",
        )
        .bind(new.price.get())
        .bind(new.restaurant_id)
        .bind(new.pizza_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    pub async fn menu_for_restaurant(
        conn: &mut SqliteConnection,
        restaurant_id: i64,
    ) -> Result<Vec<MenuEntry>, AppError> {
        let rows = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT rp.id, rp.price, rp.restaurant_id, rp.pizza_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows.into_iter().map(MenuEntry::from).collect())
    }
}
