//! Response bodies. Each endpoint serializes exactly one of these, so nested values never
//! point back at their parent.

use crate::models::{MenuEntry, Pizza, Restaurant, RestaurantPizzaDetail, RestaurantWithMenu};
use serde::Serialize;
use utoipa::ToSchema;

/// Restaurant without its menu.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Pizza without the restaurants serving it.
#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuEntryView>,
}

/// A menu entry as seen from its restaurant: the pizza is nested, the restaurant is not.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuEntryView {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
}

/// A freshly created association with both parents nested.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaView {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        RestaurantSummary {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

impl From<Pizza> for PizzaSummary {
    fn from(p: Pizza) -> Self {
        PizzaSummary {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

impl From<MenuEntry> for MenuEntryView {
    fn from(entry: MenuEntry) -> Self {
        let rp = entry.restaurant_pizza;
        MenuEntryView {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: entry.pizza.into(),
        }
    }
}

impl From<RestaurantWithMenu> for RestaurantDetail {
    fn from(r: RestaurantWithMenu) -> Self {
        RestaurantDetail {
            id: r.restaurant.id,
            name: r.restaurant.name,
            address: r.restaurant.address,
            restaurant_pizzas: r.menu.into_iter().map(MenuEntryView::from).collect(),
        }
    }
}

impl From<RestaurantPizzaDetail> for RestaurantPizzaView {
    fn from(d: RestaurantPizzaDetail) -> Self {
        let rp = d.restaurant_pizza;
        RestaurantPizzaView {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza: d.pizza.into(),
            restaurant: d.restaurant.into(),
        }
    }
}
