//! HTTP handlers for restaurants, pizzas and their priced associations.

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

use axum::response::Html;

/// Static landing page.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
