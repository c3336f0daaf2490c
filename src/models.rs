//! Rows as stored in the database.

#[derive(sqlx::FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(sqlx::FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(sqlx::FromRow, Clone, Debug, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

#[derive(Clone, Debug)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

/// Association row ready for insert. The price has already been range-checked.
#[derive(Clone, Debug)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// One line of a restaurant's menu: the priced association and the pizza it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestaurantWithMenu {
    pub restaurant: Restaurant,
    pub menu: Vec<MenuEntry>,
}

/// A stored association together with both rows it references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestaurantPizzaDetail {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// A menu price, always within [`Price::MIN`, `Price::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("price must be between 1 and 30, got {0}")]
pub struct PriceOutOfRange(pub i64);

impl Price {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 30;

    pub fn new(value: i64) -> Result<Self, PriceOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Price(value))
        } else {
            Err(PriceOutOfRange(value))
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}
