//! Pizza API: restaurants, pizzas, and the prices restaurants charge for them, served
//! as JSON over HTTP from a SQLite database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, common_routes};
pub use seed::seed_sample_data;
pub use state::AppState;

use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router: operational routes, domain routes, request tracing, and a
/// request body size limit. The limit is enforced by the body extractors, so an oversized
/// body is rejected like any other unreadable one.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
