//! Domain routes: restaurants, pizzas, and menu entries.

use crate::handlers::{index, pizzas, restaurant_pizzas, restaurants};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/restaurants", get(restaurants::list))
        .route(
            "/restaurants/:id",
            get(restaurants::read).delete(restaurants::delete),
        )
        .route("/pizzas", get(pizzas::list))
        .route("/restaurant_pizzas", post(restaurant_pizzas::create))
        .with_state(state)
}
