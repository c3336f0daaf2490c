//! Sample data for an empty database. Restaurants and pizzas have no create endpoint,
//! so this is how a fresh deployment gets rows to work with.

use crate::error::AppError;
use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza, Price};
use crate::service::{PizzaService, RestaurantPizzaService, RestaurantService};
use crate::store;
use sqlx::SqlitePool;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const MENU: &[(usize, usize, i64)] = &[
    (0, 0, 1),
    (0, 1, 4),
    (1, 1, 9),
    (1, 2, 12),
    (2, 0, 15),
    (2, 2, 30),
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Insert the sample rows in one transaction. Does nothing if any restaurant already exists.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    let mut tx = store::begin_write(pool).await?;
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "database already has restaurants; skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let new = NewRestaurant {
            name: (*name).into(),
            address: (*address).into(),
        };
        restaurant_ids.push(RestaurantService::create(&mut tx, &new).await?.id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let new = NewPizza {
            name: (*name).into(),
            ingredients: (*ingredients).into(),
        };
        pizza_ids.push(PizzaService::create(&mut tx, &new).await?.id);
    }

    for &(r, p, price) in MENU {
        let price = Price::new(price).map_err(|e| AppError::validation(e.to_string()))?;
        let new = NewRestaurantPizza {
            price,
            restaurant_id: restaurant_ids[r],
            pizza_id: pizza_ids[p],
        };
        RestaurantPizzaService::insert(&mut tx, &new).await?;
    }
    tx.commit().await?;

    let summary = SeedSummary {
        restaurants: RESTAURANTS.len(),
        pizzas: PIZZAS.len(),
        restaurant_pizzas: MENU.len(),
    };
    tracing::info!(?summary, "seeded sample data");
    Ok(summary)
}
